//! Reducer logic for the todo application.
//!
//! Each action maps to a transition function over [`AppState`]. Transitions
//! work on a copy of the current state and return it; mutating handlers
//! persist the resulting todo list through the environment's storage
//! collaborator before returning.

use microstore_core::reducer::Reducer;
use thiserror::Error;

use crate::action::TodoAction;
use crate::state::{AppState, Filter, Todo};
use crate::storage::TodoStorage;

/// Environment dependencies for the todo reducer
#[derive(Clone, Debug)]
pub struct TodoEnvironment {
    /// Persistence collaborator for the todo list
    pub storage: TodoStorage,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(storage: TodoStorage) -> Self {
        Self { storage }
    }
}

/// Precondition violations reported by [`TodoReducer`].
///
/// An out-of-range index is rejected and the previous state is kept;
/// nothing is ever partially applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// An index-based action referenced a slot outside the todo list.
    #[error("todo index {index} out of range (list has {len} items)")]
    IndexOutOfRange {
        /// Index the action carried
        index: usize,
        /// Length of the todo list at dispatch time
        len: usize,
    },
}

/// Reducer for the todo application
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn check_index(state: &AppState, index: usize) -> Result<(), TodoError> {
        if index < state.todos.len() {
            Ok(())
        } else {
            Err(TodoError::IndexOutOfRange {
                index,
                len: state.todos.len(),
            })
        }
    }

    /// Removes `todos[index]`, keeping the edit-index invariant: the edit
    /// marker is cleared when it referenced the removed todo and shifted
    /// down when it referenced a later one.
    fn destroy(state: &mut AppState, index: usize) -> Result<(), TodoError> {
        Self::check_index(state, index)?;
        state.todos.remove(index);
        state.edit_index = match state.edit_index {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        Ok(())
    }
}

impl Reducer for TodoReducer {
    type State = AppState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &AppState,
        action: TodoAction,
        env: &TodoEnvironment,
    ) -> Result<AppState, TodoError> {
        let mut next = state.clone();
        match action {
            TodoAction::Add(title) => {
                if !title.is_empty() {
                    next.todos.push(Todo::new(title));
                    env.storage.save(&next.todos);
                }
            }

            TodoAction::Toggle(index) => {
                Self::check_index(&next, index)?;
                next.todos[index].completed = !next.todos[index].completed;
                env.storage.save(&next.todos);
            }

            TodoAction::ToggleAll(completed) => {
                for todo in &mut next.todos {
                    todo.completed = completed;
                }
                env.storage.save(&next.todos);
            }

            TodoAction::Destroy(index) => {
                Self::destroy(&mut next, index)?;
                env.storage.save(&next.todos);
            }

            TodoAction::SwitchFilter(filter) => {
                // View-only state, deliberately not persisted.
                next.filter = filter;
            }

            TodoAction::ClearCompleted => {
                next.edit_index = next.edit_index.and_then(|i| {
                    let edited = next.todos.get(i)?;
                    if edited.completed {
                        None
                    } else {
                        // The edited todo survives; count the survivors before it.
                        Some(next.todos[..i].iter().filter(|t| !t.completed).count())
                    }
                });
                next.todos.retain(|todo| Filter::Active.matches(todo));
                env.storage.save(&next.todos);
            }

            TodoAction::StartEdit(index) => {
                Self::check_index(&next, index)?;
                next.edit_index = Some(index);
            }

            TodoAction::CancelEdit => {
                next.edit_index = None;
            }

            TodoAction::EndEdit(title) => {
                // The UI fires endEdit on both blur and keyup, so a second
                // delivery with no edit in progress must be a no-op.
                if let Some(index) = next.edit_index {
                    Self::check_index(&next, index)?;
                    if title.is_empty() {
                        Self::destroy(&mut next, index)?;
                    } else {
                        next.todos[index].title = title;
                    }
                    next.edit_index = None;
                    env.storage.save(&next.todos);
                }
            }
        }
        Ok(next)
    }
}
