use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;

use crate::config::Config;
use crate::error::Error;
use crate::error::Result;
use crate::fnvhash::FnvBuildHasher;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// Decides whether two keys are the same key.
///
/// Implemented by [`DefaultEq`] and by any `Fn(&K, &K) -> bool`, so a closure
/// can be handed straight to [`FHashTable::with_config_and_hasher`]. Keys
/// that are equivalent must hash identically.
pub trait KeyEquivalence<K: ?Sized> {
    /// Returns `true` if `a` and `b` denote the same key.
    fn equivalent(&self, a: &K, b: &K) -> bool;
}

/// Key equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEq;

impl<K> KeyEquivalence<K> for DefaultEq
where
    K: PartialEq + ?Sized,
{
    #[inline(always)]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

impl<K, F> KeyEquivalence<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline(always)]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// A flat hash map backed by the Robin Hood [`HashTable`].
///
/// `FHashTable<K, V, S, E>` stores `(K, V)` pairs inline in the slot array.
/// Keys are hashed with the builder `S` ([`FnvBuildHasher`] unless told
/// otherwise) and compared with `E` ([`DefaultEq`] unless told otherwise).
///
/// Every operation that may allocate returns a [`Result`]; the table is left
/// unchanged when one fails.
///
/// # Examples
///
/// ```rust
/// use fcontainers::Error;
/// use fcontainers::FHashTable;
///
/// let mut table = FHashTable::new();
/// table.insert("apple", 3).unwrap();
/// table.insert("pear", 5).unwrap();
///
/// assert_eq!(table.insert("apple", 4), Err(Error::KeyExists));
/// assert_eq!(table.search(&"apple"), Ok(&3));
///
/// table.update(&"apple", 4).unwrap();
/// assert_eq!(table.delete(&"pear"), Ok(5));
/// assert_eq!(table.count(), 1);
/// ```
pub struct FHashTable<K, V, S = FnvBuildHasher, E = DefaultEq> {
    table: HashTable<(K, V)>,
    hash_builder: S,
    key_eq: E,
}

impl<K, V, S, E> Clone for FHashTable<K, V, S, E>
where
    K: Clone,
    V: Clone,
    S: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            hash_builder: self.hash_builder.clone(),
            key_eq: self.key_eq.clone(),
        }
    }
}

impl<K, V, S, E> Debug for FHashTable<K, V, S, E>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S, E> Default for FHashTable<K, V, S, E>
where
    S: Default,
    E: Default,
{
    fn default() -> Self {
        Self::with_hasher_and_eq(S::default(), E::default())
    }
}

impl<K, V> FHashTable<K, V> {
    /// Creates an empty table with FNV-1a hashing and `PartialEq` keys.
    ///
    /// Nothing is allocated until the first insertion.
    pub const fn new() -> Self {
        Self {
            table: HashTable::new(),
            hash_builder: FnvBuildHasher::new(),
            key_eq: DefaultEq,
        }
    }

    /// Creates a table with room for at least `capacity` slots.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a zero capacity,
    /// [`Error::AllocationFailure`] if the slots cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::FHashTable;
    /// #
    /// let table: FHashTable<u32, u32> = FHashTable::with_capacity(100).unwrap();
    /// assert_eq!(table.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(&Config::default().with_capacity(capacity))
    }

    /// Creates a table from a [`Config`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::Config;
    /// # use fcontainers::Error;
    /// # use fcontainers::FHashTable;
    /// #
    /// let config = Config::default().with_capacity(2).fixed();
    /// let mut table = FHashTable::with_config(&config).unwrap();
    /// table.insert(1, "one").unwrap();
    /// table.insert(2, "two").unwrap();
    /// assert!(table.is_full());
    /// assert_eq!(table.insert(3, "three"), Err(Error::Full));
    /// ```
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::with_config_and_hasher(config, FnvBuildHasher::new(), DefaultEq)
    }
}

impl<K, V, S> FHashTable<K, V, S> {
    /// Creates an empty table using `hash_builder` to hash keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::FHashTable;
    /// # use fcontainers::murmurhash::Murmur3BuildHasher;
    /// #
    /// let mut table = FHashTable::with_hasher(Murmur3BuildHasher::with_seed(7));
    /// table.insert("key", 1).unwrap();
    /// assert_eq!(table.get_value(&"key"), Some(&1));
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_hasher_and_eq(hash_builder, DefaultEq)
    }
}

impl<K, V, S, E> FHashTable<K, V, S, E> {
    /// Creates an empty table with both a hash builder and a key
    /// equivalence.
    pub fn with_hasher_and_eq(hash_builder: S, key_eq: E) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
            key_eq,
        }
    }

    /// Creates a table from a [`Config`], hash builder and key equivalence.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a malformed configuration,
    /// [`Error::AllocationFailure`] if the slots cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::Config;
    /// # use fcontainers::FHashTable;
    /// # use fcontainers::murmurhash::Murmur3BuildHasher;
    /// #
    /// let mut table = FHashTable::with_config_and_hasher(
    ///     &Config::default().with_capacity(64),
    ///     Murmur3BuildHasher::with_seed(1),
    ///     |a: &u32, b: &u32| a == b,
    /// )
    /// .unwrap();
    /// assert_eq!(table.capacity(), 64);
    ///
    /// table.insert(234, "a").unwrap();
    /// assert!(table.contains_key(&234));
    /// ```
    pub fn with_config_and_hasher(config: &Config, hash_builder: S, key_eq: E) -> Result<Self> {
        Ok(Self {
            table: HashTable::with_config(config)?,
            hash_builder,
            key_eq,
        })
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of entries in the table. Same as [`len`].
    ///
    /// [`len`]: FHashTable::len
    pub fn count(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns `true` if every slot is occupied. Only fixed tables get here.
    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `count / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Returns the threshold that `count / capacity` is kept below.
    pub fn capacity_factor(&self) -> f64 {
        self.table.capacity_factor()
    }

    /// Returns the hash builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry, keeping the slot array. Calling it twice is the
    /// same as calling it once.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Shrinks the slot array as far as the capacity factor allows.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the smaller array cannot be allocated.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.table.shrink_to_fit()
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if growing fails, [`Error::Full`] if the
    /// table is fixed and too small.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.table.reserve(additional)
    }

    /// Deep-copies the table into a new slot array of the same capacity.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] if the copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::FHashTable;
    /// #
    /// let mut table = FHashTable::new();
    /// table.insert(1, "one").unwrap();
    ///
    /// let mut copy = table.copy().unwrap();
    /// copy.insert(2, "two").unwrap();
    /// assert_eq!(table.count(), 1);
    /// assert_eq!(copy.count(), 2);
    /// ```
    pub fn copy(&self) -> Result<Self>
    where
        K: Clone,
        V: Clone,
        S: Clone,
        E: Clone,
    {
        self.try_clone()
    }

    /// Fallible [`Clone`]. Same as [`copy`].
    ///
    /// [`copy`]: FHashTable::copy
    pub fn try_clone(&self) -> Result<Self>
    where
        K: Clone,
        V: Clone,
        S: Clone,
        E: Clone,
    {
        Ok(Self {
            table: self.table.try_clone()?,
            hash_builder: self.hash_builder.clone(),
            key_eq: self.key_eq.clone(),
        })
    }

    /// Returns an iterator over `(key, value)` pairs in slot order.
    ///
    /// The order depends on the capacity and changes across insertions,
    /// removals and resizes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over `(key, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Removes and yields every entry. The slot array is kept.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Displacement histogram of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> alloc::vec::Vec<usize> {
        self.table.probe_histogram()
    }

    /// Utilization statistics of the underlying table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Prints the displacement histogram of the underlying table.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        self.table.print_probe_histogram();
    }
}

impl<K, V, S, E> FHashTable<K, V, S, E>
where
    K: Hash,
    S: BuildHasher,
    E: KeyEquivalence<K>,
{
    #[inline(always)]
    fn hash(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// [`Error::KeyExists`] if the key is already present, in which case the
    /// stored value is kept. [`Error::AllocationFailure`] or [`Error::Full`]
    /// if there is no room for the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::Error;
    /// # use fcontainers::FHashTable;
    /// #
    /// let mut table = FHashTable::new();
    /// assert_eq!(table.insert(37, "a"), Ok(()));
    /// assert_eq!(table.insert(37, "b"), Err(Error::KeyExists));
    /// assert_eq!(table.get_value(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match self.entry(key)? {
            Entry::Occupied(_) => Err(Error::KeyExists),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Replaces the value of an existing entry and returns the old one.
    ///
    /// Never moves entries or resizes.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::Error;
    /// # use fcontainers::FHashTable;
    /// #
    /// let mut table = FHashTable::new();
    /// assert_eq!(table.update(&1, "a"), Err(Error::KeyNotFound));
    /// assert!(table.is_empty());
    ///
    /// table.insert(1, "a").unwrap();
    /// assert_eq!(table.update(&1, "b"), Ok("a"));
    /// ```
    pub fn update(&mut self, key: &K, value: V) -> Result<V> {
        match self.get_value_mut(key) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(Error::KeyNotFound),
        }
    }

    /// Inserts the entry, replacing and returning the value of an existing
    /// one.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailure`] or [`Error::Full`] if the key is new and
    /// there is no room for it.
    pub fn upsert(&mut self, key: K, value: V) -> Result<Option<V>> {
        match self.entry(key)? {
            Entry::Occupied(mut entry) => Ok(Some(entry.insert(value))),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(None)
            }
        }
    }

    /// Looks up the value stored for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn search(&self, key: &K) -> Result<&V> {
        self.get_value(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get_value(&self, key: &K) -> Option<&V> {
        let hash = self.hash(key);
        let key_eq = &self.key_eq;
        self.table
            .find(hash, |(k, _)| key_eq.equivalent(k, key))
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// The reference does not survive any later insertion, removal or
    /// clear.
    pub fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash(key);
        let key_eq = &self.key_eq;
        self.table
            .find_mut(hash, |(k, _)| key_eq.equivalent(k, key))
            .map(|(_, v)| v)
    }

    /// Returns `true` if the table holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        let hash = self.hash(key);
        let key_eq = &self.key_eq;
        self.table.contains(hash, |(k, _)| key_eq.equivalent(k, key))
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::Error;
    /// # use fcontainers::FHashTable;
    /// #
    /// let mut table = FHashTable::new();
    /// table.insert("a", 1).unwrap();
    /// assert_eq!(table.delete(&"a"), Ok(1));
    /// assert_eq!(table.delete(&"a"), Err(Error::KeyNotFound));
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<V> {
        self.remove_entry(key)
            .map(|(_, v)| v)
            .ok_or(Error::KeyNotFound)
    }

    /// Removes the entry for `key` and returns it.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash(key);
        let key_eq = &self.key_eq;
        self.table.remove(hash, |(k, _)| key_eq.equivalent(k, key))
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// # Errors
    ///
    /// Only when the key is absent: [`Error::AllocationFailure`] or
    /// [`Error::Full`] if the table cannot make room for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fcontainers::FHashTable;
    /// #
    /// let mut words = FHashTable::new();
    /// for word in "the cat saw the dog".split(' ') {
    ///     *words.entry(word).unwrap().or_insert(0) += 1;
    /// }
    /// assert_eq!(words.get_value(&"the"), Some(&2));
    /// assert_eq!(words.get_value(&"cat"), Some(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Result<Entry<'_, K, V>> {
        let hash = self.hash(&key);
        let key_eq = &self.key_eq;
        match self.table.entry(hash, |(k, _)| key_eq.equivalent(k, &key))? {
            TableEntry::Occupied(entry) => Ok(Entry::Occupied(OccupiedEntry { entry })),
            TableEntry::Vacant(entry) => Ok(Entry::Vacant(VacantEntry { entry, key })),
        }
    }
}

/// A view into a single entry of an [`FHashTable`], which may either be
/// vacant or occupied.
///
/// This enum is constructed from the [`entry`] method on [`FHashTable`].
///
/// [`entry`]: FHashTable::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry. Room for it has already been reserved, so
/// inserting cannot fail.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value and returns the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

impl<'a, K, V, S, E> IntoIterator for &'a FHashTable<K, V, S, E> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S, E> IntoIterator for &'a mut FHashTable<K, V, S, E> {
    type IntoIter = IterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over the entries of an [`FHashTable`].
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the entries of an [`FHashTable`] with mutable values.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of an [`FHashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of an [`FHashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of an [`FHashTable`].
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

/// A draining iterator over the entries of an [`FHashTable`].
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
