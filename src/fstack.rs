use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::error::Error;
use crate::error::Result;

/// A bounded LIFO stack over a contiguous array.
///
/// The capacity is exactly what was asked for. A full stack refuses new
/// values and hands them back to the caller.
///
/// # Examples
///
/// ```rust
/// # use fcontainers::FStack;
/// #
/// let mut stack = FStack::with_capacity(3).unwrap();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// stack.push(3).unwrap();
/// assert_eq!(stack.push(4), Err(4));
///
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.bottom(), Some(&1));
/// assert_eq!(stack.at(1), Some(&2));
/// assert_eq!(stack.pop(), Some(3));
/// ```
pub struct FStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FStack<T> {
    /// Creates an empty stack holding at most `capacity` values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is zero,
    /// [`Error::AllocationFailure`] if the array cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument("stack capacity must be non-zero"));
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure)?;
        Ok(Self { items, capacity })
    }

    /// Returns the number of values on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the maximum number of values the stack holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if [`push`](FStack::push) would be refused.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns the value back if the stack is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top value.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top value.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns the value pushed first.
    pub fn bottom(&self) -> Option<&T> {
        self.items.first()
    }

    /// Same as [`top`](FStack::top).
    pub fn peek(&self) -> Option<&T> {
        self.top()
    }

    /// Returns the value `index` positions below the top.
    pub fn at(&self, index: usize) -> Option<&T> {
        let position = self.items.len().checked_sub(index.checked_add(1)?)?;
        self.items.get(position)
    }

    /// Drops every value. The array is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copies the stack into a new array of the same capacity.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the array cannot be allocated.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        items
            .try_reserve_exact(self.capacity)
            .map_err(|_| Error::AllocationFailure)?;
        items.extend_from_slice(&self.items);
        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }

    /// Returns an iterator from top to bottom. Iterate in reverse for bottom
    /// to top.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter().rev(),
        }
    }
}

impl<T> Clone for FStack<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Debug for FStack<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FStack<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of an [`FStack`], top to bottom.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: core::iter::Rev<core::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
