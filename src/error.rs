//! The error type shared by every container.

use thiserror::Error;

/// Failure outcomes shared by every container in this crate.
///
/// A fallible operation either succeeds and restores all invariants, or
/// fails and leaves the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The backing array could not be allocated, or the requested capacity
    /// overflows once rounded up to a power of two.
    #[error("allocation failure")]
    AllocationFailure,
    /// `insert` was called with a key that is already present.
    #[error("key already exists")]
    KeyExists,
    /// The key is not present in the table.
    #[error("key not found")]
    KeyNotFound,
    /// A configuration value was rejected at creation time.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Every slot is occupied and the table is not allowed to grow.
    #[error("container is full")]
    Full,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
