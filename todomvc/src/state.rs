//! Domain state for the todo application.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// This is also the persistence format: the todo list is stored as the
/// JSON-serialized sequence of these records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// What needs to be done
    pub title: String,
    /// Whether it has been done
    pub completed: bool,
}

impl Todo {
    /// Creates a not-yet-completed todo.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Which todos the list view shows.
///
/// Each filter maps to a predicate over [`Todo`]; the set is fixed for the
/// process lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every todo
    #[default]
    All,
    /// Todos still to be done
    Active,
    /// Todos already done
    Completed,
}

impl Filter {
    /// All filters, in the order the footer lists them.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// The predicate this filter maps to.
    #[must_use]
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Lowercase identifier, as used in dispatch arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Capitalized label for the footer links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Parses a lowercase identifier back into a filter.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Filter::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete application state.
///
/// Invariant: `edit_index`, when present, is a valid index into `todos`.
/// The reducer clears or shifts it whenever the referenced todo is removed,
/// and clears it when editing ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Ordered todo list
    pub todos: Vec<Todo>,
    /// Current list filter (view-only, never persisted)
    pub filter: Filter,
    /// Index of the todo being edited, if any
    pub edit_index: Option<usize>,
}

impl AppState {
    /// Creates a state holding `todos`, with the default filter and no
    /// edit in progress.
    #[must_use]
    pub const fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            filter: Filter::All,
            edit_index: None,
        }
    }

    /// Number of todos still to be done.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| Filter::Active.matches(t)).count()
    }

    /// Number of todos already done.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| Filter::Completed.matches(t)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_predicates() {
        let active = Todo::new("a");
        let done = Todo {
            title: "b".to_string(),
            completed: true,
        };

        assert!(Filter::All.matches(&active) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&active) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&active) && Filter::Completed.matches(&done));
    }

    #[test]
    fn filter_parse_round_trips() {
        for filter in Filter::ALL {
            assert_eq!(Filter::parse(filter.as_str()), Some(filter));
        }
        assert_eq!(Filter::parse("done"), None);
    }

    #[test]
    fn counts_split_by_completion() {
        let state = AppState::new(vec![
            Todo::new("a"),
            Todo {
                title: "b".to_string(),
                completed: true,
            },
            Todo::new("c"),
        ]);
        assert_eq!(state.active_count(), 2);
        assert_eq!(state.completed_count(), 1);
    }
}
