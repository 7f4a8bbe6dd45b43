//! Durable key-value storage and the write-through persisted value.
//!
//! The [`KeyValueStore`] trait is the seam between the persisted value and
//! wherever the bytes actually live. Two implementations are provided:
//!
//! - [`MemoryStore`] - shared in-process map, cheap to clone
//! - [`FileStore`] - JSON object file guarded by advisory file locks

mod error;
mod file;
mod memory;
mod persisted;

use std::sync::Arc;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::PersistedValue;

/// A single string slot per key. No schema, no transactions, no expiry.
///
/// Methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. `Ok(None)` when the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the slot for `key` with `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
