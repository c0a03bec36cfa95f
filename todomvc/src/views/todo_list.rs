//! The main todo list section.

use microstore_core::template::{render, Node};

use crate::state::{Filter, Todo};
use crate::views::todo_item::{todo_item, TodoItemProps};

/// Props for [`todo_list`].
#[derive(Clone, Copy, Debug)]
pub struct TodoListProps<'a> {
    /// The full, unfiltered todo list
    pub todos: &'a [Todo],
    /// Which todos to show
    pub filter: Filter,
    /// Index of the todo currently being edited, if any
    pub edit_index: Option<usize>,
}

/// Renders the toggle-all checkbox and the filtered list of rows.
///
/// Indices are taken before filtering so each row dispatches with its
/// position in the full list.
#[must_use]
pub fn todo_list(props: &TodoListProps<'_>) -> Node {
    let items: Vec<Node> = props
        .todos
        .iter()
        .enumerate()
        .filter(|(_, todo)| props.filter.matches(todo))
        .map(|(index, todo)| {
            todo_item(&TodoItemProps {
                todo,
                index,
                edit_index: props.edit_index,
            })
        })
        .collect();
    let all_completed = props.todos.iter().all(|todo| todo.completed);

    Node::text(render(
        &[
            r#"<section class="main">
    <input id="toggle-all" class="toggle-all" type="checkbox" onchange="dispatch('toggleAll', this.checked)" "#,
            r#">
    <label for="toggle-all">Mark all as complete</label>
    <ul class="todo-list">"#,
            r#"</ul>
</section>"#,
        ],
        vec![Node::when(all_completed, "checked"), Node::Sequence(items)],
    ))
}
