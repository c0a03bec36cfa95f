//! A single row of the todo list.

use microstore_core::template::{render, Node};

use crate::state::Todo;

/// Props for [`todo_item`].
#[derive(Clone, Copy, Debug)]
pub struct TodoItemProps<'a> {
    /// The todo this row shows
    pub todo: &'a Todo,
    /// The todo's index in the full, unfiltered list - dispatch arguments
    /// in the markup index into `AppState::todos`
    pub index: usize,
    /// Index of the todo currently being edited, if any
    pub edit_index: Option<usize>,
}

/// Renders one list row with its completed/editing classes, conditional
/// `checked` attribute, and the edit input prefilled with the title.
#[must_use]
pub fn todo_item(props: &TodoItemProps<'_>) -> Node {
    let editing = props.edit_index == Some(props.index);
    Node::text(render(
        &[
            r#"<li class=""#,
            " ",
            r#""><div class="view"><input class="toggle" type="checkbox" "#,
            r#" onchange="dispatch('toggle', "#,
            r#")"><label ondblclick="dispatch('startEdit', "#,
            r#")">"#,
            r#"</label><button class="destroy" onclick="dispatch('destroy', "#,
            r#")"></button></div><input class="edit" value=""#,
            r#"" onkeyup="event.keyCode === 13 && dispatch('endEdit', this.value.trim()) || event.keyCode === 27 && dispatch('canceEdit')" onblur="dispatch('endEdit', this.value.trim())"></li>"#,
        ],
        vec![
            Node::when(props.todo.completed, "completed"),
            Node::when(editing, "editing"),
            Node::when(props.todo.completed, "checked"),
            Node::from(props.index),
            Node::from(props.index),
            Node::from(props.todo.title.as_str()),
            Node::from(props.index),
            Node::from(props.todo.title.as_str()),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_todo_gets_class_and_checked() {
        let todo = Todo {
            title: "a".to_string(),
            completed: true,
        };
        let html = todo_item(&TodoItemProps {
            todo: &todo,
            index: 0,
            edit_index: None,
        })
        .render();

        assert!(html.starts_with(r#"<li class="completed ">"#));
        assert!(html.contains(r#"type="checkbox" checked"#));
    }

    #[test]
    fn active_todo_has_neither() {
        let todo = Todo::new("a");
        let html = todo_item(&TodoItemProps {
            todo: &todo,
            index: 2,
            edit_index: None,
        })
        .render();

        assert!(html.starts_with(r#"<li class=" ">"#));
        assert!(html.contains(r#"type="checkbox"  onchange"#));
        assert!(html.contains("dispatch('toggle', 2)"));
    }

    #[test]
    fn editing_row_gets_the_editing_class() {
        let todo = Todo::new("a");
        let html = todo_item(&TodoItemProps {
            todo: &todo,
            index: 1,
            edit_index: Some(1),
        })
        .render();
        assert!(html.starts_with(r#"<li class=" editing">"#));
    }

    #[test]
    fn edit_input_is_prefilled_with_the_title() {
        let todo = Todo::new("Buy milk");
        let html = todo_item(&TodoItemProps {
            todo: &todo,
            index: 0,
            edit_index: None,
        })
        .render();
        assert!(html.contains(r#"<input class="edit" value="Buy milk""#));
        assert!(html.contains(">Buy milk</label>"));
    }
}
