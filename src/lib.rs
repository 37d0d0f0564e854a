#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod error;

/// A flat hash map over the Robin Hood [`HashTable`].
///
/// This module provides [`FHashTable`], which wraps the raw table and
/// supplies key hashing and key equivalence.
pub mod fhashtable;

pub mod fnvhash;

/// A bounded FIFO queue over a power-of-two ring buffer.
pub mod fqueue;

/// A bounded LIFO stack over a contiguous array.
pub mod fstack;

/// The raw Robin Hood table. Callers supply the hash and an equality
/// predicate for every operation.
pub mod hash_table;

pub mod murmurhash;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use fhashtable::DefaultEq;
pub use fhashtable::Entry;
pub use fhashtable::FHashTable;
pub use fhashtable::KeyEquivalence;
pub use fnvhash::FnvBuildHasher;
pub use fnvhash::FnvHasher;
pub use fqueue::FQueue;
pub use fstack::FStack;
pub use hash_table::HashTable;
