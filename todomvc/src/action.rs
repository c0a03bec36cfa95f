//! Actions for the todo application.
//!
//! The action space is a closed enum: every possible state transition is a
//! variant, and the reducer matches exhaustively, so a malformed or unknown
//! action is unrepresentable.

use microstore_core::action::Action;

use crate::state::Filter;

/// Every state transition the application supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a todo with the given title; empty titles are a no-op.
    Add(String),
    /// Flip the completed flag of the todo at this index.
    Toggle(usize),
    /// Set every todo's completed flag to the given value.
    ToggleAll(bool),
    /// Remove the todo at this index.
    Destroy(usize),
    /// Change which todos the list shows (view-only state).
    SwitchFilter(Filter),
    /// Drop every completed todo.
    ClearCompleted,
    /// Begin editing the todo at this index.
    StartEdit(usize),
    /// Abandon the edit in progress.
    CancelEdit,
    /// Finish the edit in progress: a non-empty title is committed, an
    /// empty title destroys the edited todo.
    EndEdit(String),
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        match self {
            TodoAction::Add(_) => "add",
            TodoAction::Toggle(_) => "toggle",
            TodoAction::ToggleAll(_) => "toggle_all",
            TodoAction::Destroy(_) => "destroy",
            TodoAction::SwitchFilter(_) => "switch_filter",
            TodoAction::ClearCompleted => "clear_completed",
            TodoAction::StartEdit(_) => "start_edit",
            TodoAction::CancelEdit => "cancel_edit",
            TodoAction::EndEdit(_) => "end_edit",
        }
    }
}
