//! Creation parameters shared by the hash tables.

use crate::error::Error;
use crate::error::Result;

/// Capacity used when none is given, and the size of the first allocation
/// of a table created with `new()`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Load-factor threshold used when none is given.
pub const DEFAULT_CAPACITY_FACTOR: f64 = 0.75;

/// Creation parameters for a [`HashTable`](crate::HashTable) or
/// [`FHashTable`](crate::FHashTable).
///
/// The hash and key-equality strategies are type parameters of
/// [`FHashTable`](crate::FHashTable) rather than fields here.
///
/// # Examples
///
/// ```rust
/// use fcontainers::Config;
///
/// let config = Config::default().with_capacity(100).with_capacity_factor(0.5);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.slot_count().unwrap(), 128);
///
/// assert!(Config::default().with_capacity(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Requested number of slots; rounded up to a power of two.
    pub capacity: usize,
    /// Fraction in `(0, 1)`. The table grows before `len / capacity` would
    /// reach it.
    pub capacity_factor: f64,
    /// When `false` the table never reallocates and rejects insertions into
    /// a completely full slot array with [`Error::Full`].
    pub growable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            capacity_factor: DEFAULT_CAPACITY_FACTOR,
            growable: true,
        }
    }
}

impl Config {
    /// Sets the requested initial capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load-factor threshold.
    pub fn with_capacity_factor(mut self, capacity_factor: f64) -> Self {
        self.capacity_factor = capacity_factor;
        self
    }

    /// Disables growth: the slot array keeps its initial size for the
    /// lifetime of the table.
    pub fn fixed(mut self) -> Self {
        self.growable = false;
        self
    }

    /// Checks the configuration for malformed values.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidArgument("capacity must be positive"));
        }
        if !self.capacity_factor.is_finite()
            || self.capacity_factor <= 0.0
            || self.capacity_factor >= 1.0
        {
            return Err(Error::InvalidArgument(
                "capacity factor must lie strictly between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Validates the configuration and returns the number of slots a table
    /// created from it allocates.
    pub fn slot_count(&self) -> Result<usize> {
        self.validate()?;
        self.capacity
            .checked_next_power_of_two()
            .ok_or(Error::AllocationFailure)
    }
}
