//! # TodoMVC
//!
//! A TodoMVC application built on the microstore architecture.
//!
//! The crate wires the generic pieces together:
//! - [`state`]: `Todo`, `Filter`, and `AppState`
//! - [`action`]: the closed `TodoAction` enum
//! - [`reducer`]: `TodoReducer` with its environment and error type
//! - [`storage`]: JSON persistence of the todo list under a fixed key
//! - [`views`]: pure components rendering `AppState` to HTML
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use microstore_core::middleware::Logging;
//! use microstore_runtime::{Store, StringRoot};
//! use todomvc::reducer::{TodoEnvironment, TodoReducer};
//! use todomvc::storage::TodoStorage;
//! use todomvc::{app_view, AppState, TodoAction};
//!
//! # struct NullStore;
//! # impl microstore_core::environment::KeyValueStore for NullStore {
//! #     fn get(&self, _key: &str) -> Option<String> { None }
//! #     fn set(&self, _key: &str, _value: &str)
//! #         -> Result<(), microstore_core::environment::StorageError> { Ok(()) }
//! # }
//! let storage = TodoStorage::new(Arc::new(NullStore));
//! let todos = storage.load();
//! let env = TodoEnvironment::new(storage);
//!
//! let mut store = Store::new(AppState::new(todos), Logging::new(TodoReducer::new()), env);
//! let root = StringRoot::new();
//! store.attach(app_view(), Box::new(root.clone()));
//!
//! store.dispatch(TodoAction::Add("Buy milk".to_string()))?;
//! assert!(root.content().contains("Buy milk"));
//! # Ok::<(), todomvc::reducer::TodoError>(())
//! ```

pub mod action;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod views;

pub use action::TodoAction;
pub use state::{AppState, Filter, Todo};

use microstore_runtime::{connect, View};

/// The connected root view: injects the whole state into [`views::app`].
#[must_use]
pub fn app_view() -> View<AppState> {
    connect(Clone::clone, |state: AppState| views::app(&state))
}
