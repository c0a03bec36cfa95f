//! Root component.

use microstore_core::template::{render, Node};

use crate::state::AppState;
use crate::views::footer::{footer, FooterProps};
use crate::views::header::header;
use crate::views::todo_list::{todo_list, TodoListProps};

/// Renders the whole application: the header always, the list and footer
/// only when there are todos.
#[must_use]
pub fn app(state: &AppState) -> Node {
    let has_todos = !state.todos.is_empty();
    Node::text(render(
        &[
            r#"<section class="todoapp">
    "#,
            "\n    ",
            "\n    ",
            "\n</section>",
        ],
        vec![
            header(),
            Node::when(
                has_todos,
                todo_list(&TodoListProps {
                    todos: &state.todos,
                    filter: state.filter,
                    edit_index: state.edit_index,
                }),
            ),
            Node::when(
                has_todos,
                footer(&FooterProps {
                    todos: &state.todos,
                    filter: state.filter,
                }),
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Todo;

    #[test]
    fn empty_state_renders_header_only() {
        let html = app(&AppState::default()).render();
        assert!(html.contains(r#"<header class="header">"#));
        assert!(!html.contains(r#"<section class="main">"#));
        assert!(!html.contains(r#"<footer class="footer">"#));
    }

    #[test]
    fn non_empty_state_renders_list_and_footer() {
        let html = app(&AppState::new(vec![Todo::new("a")])).render();
        assert!(html.contains(r#"<section class="main">"#));
        assert!(html.contains(r#"<footer class="footer">"#));
    }
}
