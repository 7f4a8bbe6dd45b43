use super::KeyValueStore;

/// A string value mirrored into a [`KeyValueStore`] slot.
///
/// The store is read exactly once, when the value is bound to its key.
/// Every [`set`](Self::set) writes straight through to the store; there is no
/// batching or debouncing.
#[derive(Debug)]
pub struct PersistedValue<S> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistedValue<S> {
    /// Bind `key` and load its current value.
    ///
    /// Falls back to `default` when the slot is empty or the store cannot be
    /// read. The default is not written back until the first `set`.
    pub fn initialize(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = match store.get(&key) {
            Ok(Some(stored)) => stored,
            Ok(None) => default.into(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Store read failed, using default");
                default.into()
            }
        };

        Self { store, key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current in-memory value. Never touches the store.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and write it through to the store.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory value is
    /// updated regardless and the session carries on without persistence.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Err(e) = self.store.set(&self.key, &self.value) {
            tracing::warn!(key = %self.key, error = %e, "Store write failed, continuing in memory");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
