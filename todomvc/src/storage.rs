//! Persistence of the todo list.
//!
//! The todo list lives under a single fixed key in a [`KeyValueStore`],
//! serialized as JSON. Loading is forgiving: missing or unparseable data is
//! the same as no data. Saving is fire-and-forget: a failed write is logged
//! and the application carries on with its in-memory state - persistence
//! errors never reach the view layer.

use std::sync::Arc;

use microstore_core::environment::KeyValueStore;

use crate::state::Todo;

/// Fixed key the todo list is stored under.
pub const TODOS_KEY: &str = "TODOS";

/// The todo list's view of the key-value store.
#[derive(Clone)]
pub struct TodoStorage {
    store: Arc<dyn KeyValueStore>,
}

impl TodoStorage {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the persisted todo list.
    ///
    /// A missing value and a value that fails to parse both yield an empty
    /// list.
    #[must_use]
    pub fn load(&self) -> Vec<Todo> {
        self.store
            .get(TODOS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persists the full todo list, overwriting the previous value.
    pub fn save(&self, todos: &[Todo]) {
        match serde_json::to_string(todos) {
            Ok(raw) => {
                if let Err(error) = self.store.set(TODOS_KEY, &raw) {
                    tracing::warn!(%error, "failed to persist todo list");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to serialize todo list"),
        }
    }
}

impl std::fmt::Debug for TodoStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStorage").finish_non_exhaustive()
    }
}
