use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::mem;

use crate::config::Config;
use crate::config::DEFAULT_CAPACITY;
use crate::config::DEFAULT_CAPACITY_FACTOR;
use crate::error::Error;
use crate::error::Result;
use crate::murmurhash::fmix64;

#[derive(Clone)]
struct Bucket<V> {
    hash: u64,
    /// Distance from the home slot, see [`home_slot`].
    displacement: usize,
    value: V,
}

/// One position of the slot store. Occupancy is the variant itself, so there
/// is no sentinel displacement that could collide with a real one.
#[derive(Clone)]
enum Slot<V> {
    Empty,
    Occupied(Bucket<V>),
}

/// The home slot of `hash` in a table of `mask + 1` slots.
///
/// The hash is finalized before masking: hashers such as FNV-1a end in a
/// multiply, so their low bits only see the low bits of the input.
#[inline(always)]
fn home_slot(hash: u64, mask: usize) -> usize {
    fmix64(hash) as usize & mask
}

impl<V> Slot<V> {
    #[inline(always)]
    fn as_occupied(&self) -> Option<&Bucket<V>> {
        match self {
            Slot::Occupied(bucket) => Some(bucket),
            Slot::Empty => None,
        }
    }

    #[inline(always)]
    fn as_occupied_mut(&mut self) -> Option<&mut Bucket<V>> {
        match self {
            Slot::Occupied(bucket) => Some(bucket),
            Slot::Empty => None,
        }
    }
}

fn alloc_slots<V>(count: usize) -> Result<Vec<Slot<V>>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailure)?;
    slots.resize_with(count, || Slot::Empty);
    Ok(slots)
}

/// Debug statistics for hash table analysis.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of slots in the slot array
    pub capacity: usize,
    /// populated / capacity
    pub load_factor: f64,
    /// Threshold the load factor is kept below
    pub capacity_factor: f64,
    /// Largest distance of any entry from its home slot
    pub max_displacement: usize,
    /// Average distance of the entries from their home slots
    pub mean_displacement: f64,
    /// Total memory in bytes used by the slot array
    pub total_bytes: usize,
    /// Bytes held by empty slots
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor, threshold {:.2}%)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0,
            self.capacity_factor * 100.0
        );
        println!(
            "Displacement: max {}, mean {:.3}",
            self.max_displacement, self.mean_displacement
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// An open-addressing hash table using Robin Hood linear probing.
///
/// `HashTable<V>` stores values of type `V` in a flat slot array. It does not
/// know how to hash or compare values: every operation takes the hash and an
/// equality predicate.
///
/// Each occupied slot records its displacement from the key's home slot.
/// Insertion steals the slot of any entry closer to its home than the one
/// being carried, lookups stop as soon as they pass an entry with a smaller
/// displacement than the distance probed, and removal shifts the rest of the
/// run back by one. No tombstones are ever written.
///
/// The slot count is always a power of two. A growable table doubles before
/// an insertion would take `len / capacity` to the capacity factor.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use fcontainers::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100).unwrap();
/// let hash = hash_id(123);
///
/// // Insert a person
/// match table.entry(hash, |p: &Person| p.id == 123).unwrap() {
///     fcontainers::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     fcontainers::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// ```
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,
    populated: usize,
    capacity_factor: f64,
    growable: bool,
    /// Slot count of the first allocation when `slots` is empty.
    initial_capacity: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field(
                "slots",
                &self
                    .slots
                    .chunks(16)
                    .map(|row| {
                        row.iter()
                            .map(|slot| match slot {
                                Slot::Empty => "..".to_string(),
                                Slot::Occupied(bucket) => format!("{:02}", bucket.displacement),
                            })
                            .collect::<Vec<String>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("capacity", &self.slots.len())
            .field("capacity_factor", &self.capacity_factor)
            .field("growable", &self.growable)
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            populated: self.populated,
            capacity_factor: self.capacity_factor,
            growable: self.growable,
            initial_capacity: self.initial_capacity,
        }
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty, growable table without allocating.
    ///
    /// The first insertion allocates [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::new();
    /// assert_eq!(table.capacity(), 0);
    /// assert!(table.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            populated: 0,
            capacity_factor: DEFAULT_CAPACITY_FACTOR,
            growable: true,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates a growable table with at least `capacity` slots and the
    /// default capacity factor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is zero,
    /// [`Error::AllocationFailure`] if the slot array cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100).unwrap();
    /// assert_eq!(table.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(&Config::default().with_capacity(capacity))
    }

    /// Creates a table from a [`Config`], allocating its slot array up
    /// front.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a malformed configuration,
    /// [`Error::AllocationFailure`] if the slot array cannot be allocated.
    pub fn with_config(config: &Config) -> Result<Self> {
        let capacity = config.slot_count()?;
        Ok(Self {
            slots: alloc_slots(capacity)?,
            populated: 0,
            capacity_factor: config.capacity_factor,
            growable: config.growable,
            initial_capacity: capacity,
        })
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// Only reachable by tables created with [`Config::fixed`]; a growable
    /// table reallocates long before.
    pub fn is_full(&self) -> bool {
        !self.slots.is_empty() && self.populated == self.slots.len()
    }

    /// Returns the number of slots in the slot array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the threshold that `len / capacity` is kept below.
    pub fn capacity_factor(&self) -> f64 {
        self.capacity_factor
    }

    /// Returns `len / capacity`, or `0.0` for an unallocated table.
    pub fn load_factor(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.populated as f64 / self.slots.len() as f64
        }
    }

    /// Returns `true` if the table may reallocate its slot array.
    pub fn is_growable(&self) -> bool {
        self.growable
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.slots.len().wrapping_sub(1)
    }

    #[inline(always)]
    fn home(&self, hash: u64) -> usize {
        home_slot(hash, self.mask())
    }

    #[inline(always)]
    fn over_threshold(&self, count: usize, capacity: usize) -> bool {
        count as f64 >= self.capacity_factor * capacity as f64
    }

    /// Walk the probe sequence from the home slot of `hash`.
    ///
    /// Stops at an empty slot, or at an entry whose displacement is smaller
    /// than the distance already probed: a match would have stolen that slot
    /// on insertion, so it cannot lie further along.
    #[inline]
    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.populated == 0 {
            return None;
        }

        let mask = self.mask();
        let mut index = self.home(hash);
        for distance in 0..self.slots.len() {
            let bucket = self.slots[index].as_occupied()?;
            if bucket.displacement < distance {
                return None;
            }
            if bucket.hash == hash && eq(&bucket.value) {
                return Some(index);
            }
            index = (index + 1) & mask;
        }

        None
    }

    /// Place a value whose key is known to be absent, returning the index it
    /// lands on.
    ///
    /// The caller must ensure at least one slot is empty.
    fn place(&mut self, hash: u64, value: V) -> usize {
        debug_assert!(self.populated < self.slots.len());

        let mask = self.mask();
        let mut index = self.home(hash);
        let mut carried = Bucket {
            hash,
            displacement: 0,
            value,
        };
        let mut landed = None;

        loop {
            let slot = &mut self.slots[index];
            match slot {
                Slot::Empty => {
                    *slot = Slot::Occupied(carried);
                    self.populated += 1;
                    return landed.unwrap_or(index);
                }
                Slot::Occupied(resident) => {
                    if resident.displacement < carried.displacement {
                        mem::swap(resident, &mut carried);
                        landed.get_or_insert(index);
                    }
                }
            }

            index = (index + 1) & mask;
            carried.displacement += 1;
        }
    }

    /// Ensure the table can hold `required` elements without breaking the
    /// load-factor threshold.
    fn reserve_for(&mut self, required: usize) -> Result<()> {
        if !self.growable {
            return if required > self.slots.len() {
                Err(Error::Full)
            } else {
                Ok(())
            };
        }

        if !self.slots.is_empty() && !self.over_threshold(required, self.slots.len()) {
            return Ok(());
        }

        let mut capacity = if self.slots.is_empty() {
            self.initial_capacity
        } else {
            self.slots
                .len()
                .checked_mul(2)
                .ok_or(Error::AllocationFailure)?
        };
        while self.over_threshold(required, capacity) {
            capacity = capacity.checked_mul(2).ok_or(Error::AllocationFailure)?;
        }

        self.resize(capacity)
    }

    /// Move every entry into a fresh slot array of `capacity` slots.
    ///
    /// Displacements are recomputed against the new mask. The new array is
    /// allocated before anything is moved, so a failure leaves the table
    /// untouched.
    #[cold]
    fn resize(&mut self, capacity: usize) -> Result<()> {
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(capacity > self.populated);

        let new_slots = alloc_slots(capacity)?;
        let old_slots = mem::replace(&mut self.slots, new_slots);
        self.populated = 0;

        for slot in old_slots {
            if let Slot::Occupied(bucket) = slot {
                self.place(bucket.hash, bucket.value);
            }
        }

        Ok(())
    }

    /// Empty the slot at `index` and close the gap by shifting the following
    /// displaced entries back by one.
    fn remove_at(&mut self, mut index: usize) -> Option<V> {
        let removed = match mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Occupied(bucket) => bucket,
            Slot::Empty => return None,
        };
        self.populated -= 1;

        let mask = self.mask();
        loop {
            let next = (index + 1) & mask;
            match self.slots[next].as_occupied() {
                Some(bucket) if bucket.displacement > 0 => {}
                _ => break,
            }

            let mut shifted = mem::replace(&mut self.slots[next], Slot::Empty);
            if let Some(bucket) = shifted.as_occupied_mut() {
                bucket.displacement -= 1;
            }
            self.slots[index] = shifted;
            index = next;
        }

        Some(removed.value)
    }

    #[inline(always)]
    fn value_ref(&self, index: usize) -> &V {
        match &self.slots[index] {
            Slot::Occupied(bucket) => &bucket.value,
            Slot::Empty => unreachable!("slot {index} is not occupied"),
        }
    }

    #[inline(always)]
    fn value_mut(&mut self, index: usize) -> &mut V {
        match &mut self.slots[index] {
            Slot::Occupied(bucket) => &mut bucket.value,
            Slot::Empty => unreachable!("slot {index} is not occupied"),
        }
    }

    /// Finds a value in the table by hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use fcontainers::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table
    ///     .entry(hash_u64(42), |&n: &u64| n == 42)
    ///     .unwrap()
    ///     .or_insert(42);
    ///
    /// assert_eq!(table.find(hash_u64(42), |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(hash_u64(99), |&n| n == 99), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.find_index(hash, eq)?;
        Some(self.value_ref(index))
    }

    /// Finds a value in the table by hash and equality predicate, returning a
    /// mutable reference.
    ///
    /// The reference is invalidated by any later insertion, removal or
    /// clear, all of which may move entries.
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        Some(self.value_mut(index))
    }

    /// Returns `true` if a value matching `eq` is stored under `hash`.
    #[inline]
    pub fn contains(&self, hash: u64, eq: impl Fn(&V) -> bool) -> bool {
        self.find_index(hash, eq).is_some()
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// When no value matches, the table first makes room for one more
    /// element (growing if needed), so inserting through the returned
    /// [`VacantEntry`] cannot fail.
    ///
    /// # Errors
    ///
    /// Only when the entry would be vacant: [`Error::AllocationFailure`] if
    /// growing fails, [`Error::Full`] if the table is fixed and full. The
    /// table is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use fcontainers::hash_table::Entry;
    /// # use fcontainers::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// let hash = hash_str("hello");
    ///
    /// match table.entry(hash, |s: &String| s == "hello").unwrap() {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         *entry.get_mut() = "updated".to_string();
    ///     }
    /// }
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Result<Entry<'_, V>> {
        if let Some(index) = self.find_index(hash, &eq) {
            return Ok(Entry::Occupied(OccupiedEntry { table: self, index }));
        }

        self.reserve_for(self.populated + 1)?;
        Ok(Entry::Vacant(VacantEntry { table: self, hash }))
    }

    /// Inserts `value` under `hash` without looking for an existing match.
    ///
    /// The caller is responsible for uniqueness: inserting a value that is
    /// already present leaves both copies in the table, and lookups return
    /// whichever sits first in the probe sequence.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growing fails, [`Error::Full`] if the
    /// table is fixed and full.
    pub fn insert_unique(&mut self, hash: u64, value: V) -> Result<&mut V> {
        self.reserve_for(self.populated + 1)?;
        let index = self.place(hash, value);
        Ok(self.value_mut(index))
    }

    /// Removes and returns a value from the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use fcontainers::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_u64(n: u64) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     n.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table
    ///     .entry(hash_u64(42), |&n: &u64| n == 42)
    ///     .unwrap()
    ///     .or_insert(42);
    ///
    /// assert_eq!(table.remove(hash_u64(42), |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(hash_u64(99), |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.find_index(hash, eq)?;
        self.remove_at(index)
    }

    /// Removes all elements from the table, keeping the slot array.
    pub fn clear(&mut self) {
        if self.populated > 0 {
            self.slots.fill_with(|| Slot::Empty);
        }
        self.populated = 0;
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// After a successful call, `additional` insertions will not reallocate.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growing fails, [`Error::Full`] if the
    /// table is fixed and too small.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .populated
            .checked_add(additional)
            .ok_or(Error::AllocationFailure)?;
        self.reserve_for(required)
    }

    /// Shrinks the slot array to the smallest power of two that keeps the
    /// load factor below the threshold.
    ///
    /// An empty table releases its slot array entirely. Fixed tables are
    /// left as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::with_capacity(1000).unwrap();
    /// table.entry(42, |&v| v == 5).unwrap().or_insert(5);
    /// table.entry(123, |&v| v == 10).unwrap().or_insert(10);
    ///
    /// table.shrink_to_fit().unwrap();
    /// assert_eq!(table.capacity(), 4);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if !self.growable {
            return Ok(());
        }

        if self.populated == 0 {
            self.slots = Vec::new();
            return Ok(());
        }

        let mut capacity = 1usize;
        while self.over_threshold(self.populated, capacity) {
            capacity = capacity.checked_mul(2).ok_or(Error::AllocationFailure)?;
        }
        if capacity < self.slots.len() {
            self.resize(capacity)?;
        }
        Ok(())
    }

    /// Copies the table into a new slot array of the same capacity.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self>
    where
        V: Clone,
    {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(self.slots.len())
            .map_err(|_| Error::AllocationFailure)?;
        slots.extend(self.slots.iter().cloned());

        Ok(Self {
            slots,
            populated: self.populated,
            capacity_factor: self.capacity_factor,
            growable: self.growable,
            initial_capacity: self.initial_capacity,
        })
    }

    /// Returns an iterator over all values in slot order.
    ///
    /// The order depends on the capacity and is not stable across
    /// insertions or removals. Calling `iter` again restarts from the first
    /// slot.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over mutable references to all values in slot
    /// order.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            remaining: self.populated,
            slots: self.slots.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The slot array is kept. Dropping the iterator early still empties the
    /// table.
    pub fn drain(&mut self) -> Drain<'_, V> {
        let HashTable {
            slots, populated, ..
        } = self;
        Drain {
            slots: slots.iter_mut(),
            populated,
        }
    }

    /// Computes a histogram of displacements: entry `d` counts the values
    /// stored `d` slots past their home slot.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for bucket in self.slots.iter().filter_map(Slot::as_occupied) {
            if hist.len() <= bucket.displacement {
                hist.resize(bucket.displacement + 1, 0);
            }
            hist[bucket.displacement] += 1;
        }
        hist
    }

    /// Returns detailed utilization statistics for debugging.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let slot_bytes = core::mem::size_of::<Slot<V>>();
        let (max_displacement, total_displacement) = self
            .slots
            .iter()
            .filter_map(Slot::as_occupied)
            .fold((0, 0), |(max, total), bucket| {
                (max.max(bucket.displacement), total + bucket.displacement)
            });

        DebugStats {
            populated: self.populated,
            capacity: self.slots.len(),
            load_factor: self.load_factor(),
            capacity_factor: self.capacity_factor,
            max_displacement,
            mean_displacement: if self.populated == 0 {
                0.0
            } else {
                total_displacement as f64 / self.populated as f64
            },
            total_bytes: self.slots.len() * slot_bytes,
            wasted_bytes: (self.slots.len() - self.populated) * slot_bytes,
        }
    }

    /// Pretty-prints the displacement histogram horizontally using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.populated);

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let full = units / 8;
            let rem = units % 8;
            let mut bar = "█".repeat(full);
            if rem > 0 {
                let ch = match rem {
                    1 => '▏',
                    2 => '▎',
                    3 => '▍',
                    4 => '▌',
                    5 => '▋',
                    6 => '▊',
                    _ => '▉',
                };
                bar.push(ch);
            }
            bar
        };

        for (displacement, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", displacement, make_bar(count), count);
        }
    }

    /// Asserts every structural invariant of the slot store.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mask = self.mask();
        let mut occupied = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(bucket) = slot.as_occupied() else {
                continue;
            };
            occupied += 1;

            let home = self.home(bucket.hash);
            assert_eq!(
                bucket.displacement,
                index.wrapping_sub(home) & mask,
                "slot {index}: displacement does not match home {home}"
            );

            if bucket.displacement > 0 {
                let prev = self.slots[(index + self.slots.len() - 1) & mask]
                    .as_occupied()
                    .unwrap_or_else(|| panic!("slot {index}: displaced entry after a hole"));
                assert!(
                    bucket.displacement <= prev.displacement + 1,
                    "slot {index}: Robin Hood ordering broken"
                );
            }
        }
        assert_eq!(occupied, self.populated);

        if self.growable && self.populated > 0 {
            assert!(self.load_factor() < self.capacity_factor);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - no value matched
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a value matched
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the stored value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Runs `f` on the value if the entry is occupied.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Inserts `V::default()` if the entry is vacant.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

/// A view into a vacant entry in a [`HashTable`]. Room for the value has
/// already been reserved.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts `value` with Robin Hood placement and returns a mutable
    /// reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let index = self.table.place(self.hash, value);
        self.table.value_mut(index)
    }

    /// Returns the hash this entry was looked up with.
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.value_ref(self.index)
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.value_mut(self.index)
    }

    /// Converts the entry into a mutable reference bound to the table's
    /// borrow.
    pub fn into_mut(self) -> &'a mut V {
        self.table.value_mut(self.index)
    }

    /// Removes the value from the table and returns it.
    pub fn remove(self) -> V {
        match self.table.remove_at(self.index) {
            Some(value) => value,
            None => unreachable!("occupied entry points at an empty slot"),
        }
    }
}

/// An iterator over the values of a [`HashTable`], in slot order.
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the values of a [`HashTable`].
pub struct IterMut<'a, V> {
    slots: core::slice::IterMut<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = slot {
                self.remaining -= 1;
                return Some(&mut bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    slots: core::slice::IterMut<'a, Slot<V>>,
    populated: &'a mut usize,
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if *self.populated == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(bucket) = mem::replace(slot, Slot::Empty) {
                *self.populated -= 1;
                return Some(bucket.value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (*self.populated, Some(*self.populated))
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
