use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::error::Error;
use crate::error::Result;

fn alloc_ring<T>(capacity: usize) -> Result<Vec<Option<T>>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailure)?;
    buf.resize_with(capacity, || None);
    Ok(buf)
}

/// A bounded FIFO queue over a ring buffer.
///
/// The capacity is fixed at creation and rounded up to a power of two, so
/// wrapping an index is a mask. A full queue refuses new values and hands
/// them back to the caller.
///
/// # Examples
///
/// ```rust
/// # use fcontainers::FQueue;
/// #
/// let mut queue = FQueue::with_capacity(3).unwrap();
/// assert_eq!(queue.capacity(), 4);
///
/// for c in ['a', 'b', 'c', 'd'] {
///     queue.enqueue(c).unwrap();
/// }
/// assert!(queue.is_full());
/// assert_eq!(queue.enqueue('e'), Err('e'));
///
/// assert_eq!(queue.front(), Some(&'a'));
/// assert_eq!(queue.back(), Some(&'d'));
/// assert_eq!(queue.at(2), Some(&'c'));
/// assert_eq!(queue.dequeue(), Some('a'));
/// ```
pub struct FQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> FQueue<T> {
    /// Creates an empty queue holding at least `capacity` values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is zero,
    /// [`Error::AllocationFailure`] if the buffer cannot be allocated or the
    /// rounded capacity overflows.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument("queue capacity must be non-zero"));
        }
        let capacity = capacity
            .checked_next_power_of_two()
            .ok_or(Error::AllocationFailure)?;

        Ok(Self {
            buf: alloc_ring(capacity)?,
            head: 0,
            len: 0,
        })
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) & (self.buf.len() - 1)
    }

    /// Returns the number of queued values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of values the queue holds.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if [`enqueue`](FQueue::enqueue) would be refused.
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns the value back if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let index = self.slot(self.len);
        self.buf[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        value
    }

    /// Returns the value that [`dequeue`](FQueue::dequeue) would return next.
    pub fn front(&self) -> Option<&T> {
        self.at(0)
    }

    /// Returns the most recently enqueued value.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.at(i))
    }

    /// Same as [`front`](FQueue::front).
    pub fn peek(&self) -> Option<&T> {
        self.front()
    }

    /// Returns the value `index` positions behind the front.
    pub fn at(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buf[self.slot(index)].as_ref()
    }

    /// Returns a mutable reference to the value `index` positions behind the
    /// front.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.buf[slot].as_mut()
    }

    /// Drops every queued value. The buffer is kept.
    pub fn clear(&mut self) {
        for offset in 0..self.len {
            let index = self.slot(offset);
            self.buf[index] = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Copies the queue into a new buffer of the same capacity, with the
    /// front moved to the start of the buffer.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut buf = alloc_ring(self.buf.len())?;
        for (slot, value) in buf.iter_mut().zip(self.iter()) {
            *slot = Some(value.clone());
        }
        Ok(Self {
            buf,
            head: 0,
            len: self.len,
        })
    }

    /// Returns an iterator from front to back. Iterate in reverse for back
    /// to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T> Clone for FQueue<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut buf: Vec<Option<T>> = self.iter().cloned().map(Some).collect();
        buf.resize_with(self.buf.len(), || None);
        Self {
            buf,
            head: 0,
            len: self.len,
        }
    }
}

impl<T> Debug for FQueue<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FQueue<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of an [`FQueue`], front to back.
pub struct Iter<'a, T> {
    queue: &'a FQueue<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.queue.at(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.queue.at(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
