//! Mock implementations of environment traits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use microstore_core::environment::{KeyValueStore, StorageError};

/// In-memory [`KeyValueStore`] for tests.
///
/// Clones share one map, so a test can hand the store to an environment and
/// keep a handle for asserting what was persisted. Writes can be made to
/// fail with [`MemoryStore::fail_writes`] to exercise save-failure paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, for assertions.
    #[must_use]
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().expect("mock store lock poisoned").get(key).cloned()
    }

    /// Makes every subsequent `set` fail when `fail` is true.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().expect("mock store lock poisoned") = fail;
    }
}

impl KeyValueStore for MemoryStore {
    #[allow(clippy::expect_used)] // Test code can use expect
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("mock store lock poisoned").get(key).cloned()
    }

    #[allow(clippy::expect_used)] // Test code can use expect
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.lock().expect("mock store lock poisoned") {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("simulated write failure"),
            });
        }
        self.values
            .lock()
            .expect("mock store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
