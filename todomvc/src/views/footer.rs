//! Footer: active count, filter links, clear-completed button.

use microstore_core::template::{render, Node};

use crate::state::{Filter, Todo};

/// Props for [`footer`].
#[derive(Clone, Copy, Debug)]
pub struct FooterProps<'a> {
    /// The full todo list
    pub todos: &'a [Todo],
    /// Currently selected filter
    pub filter: Filter,
}

fn filter_link(filter: Filter, selected: Filter) -> Node {
    Node::text(render(
        &[
            r#"<li><a class=""#,
            r##"" href="#" onclick="dispatch('switchFilter', '"##,
            r#"')">"#,
            "</a></li>",
        ],
        vec![
            Node::when(filter == selected, "selected"),
            Node::from(filter.as_str()),
            Node::from(filter.label()),
        ],
    ))
}

/// Renders the footer. The clear-completed button only appears when a
/// completed todo exists.
#[must_use]
pub fn footer(props: &FooterProps<'_>) -> Node {
    let active = props
        .todos
        .iter()
        .filter(|t| Filter::Active.matches(t))
        .count();
    let completed = props
        .todos
        .iter()
        .filter(|t| Filter::Completed.matches(t))
        .count();
    let links: Vec<Node> = Filter::ALL
        .into_iter()
        .map(|filter| filter_link(filter, props.filter))
        .collect();

    Node::text(render(
        &[
            r#"<footer class="footer">
    <span class="todo-count"><strong>"#,
            r#"</strong> item left</span>
    <ul class="filters">"#,
            r#"</ul>
    "#,
            r#"
</footer>"#,
        ],
        vec![
            Node::from(active),
            Node::Sequence(links),
            Node::when(
                completed > 0,
                r#"<button class="clear-completed" onclick="dispatch('clearCompleted')">Clear completed</button>"#,
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(title: &str) -> Todo {
        Todo {
            title: title.to_string(),
            completed: true,
        }
    }

    #[test]
    fn zero_active_count_is_rendered() {
        // Numeric 0 must survive the falsy filter.
        let todos = vec![done("a")];
        let html = footer(&FooterProps {
            todos: &todos,
            filter: Filter::All,
        })
        .render();
        assert!(html.contains("<strong>0</strong> item left"));
    }

    #[test]
    fn selected_filter_link_gets_the_class() {
        let todos = vec![Todo::new("a")];
        let html = footer(&FooterProps {
            todos: &todos,
            filter: Filter::Active,
        })
        .render();

        assert!(html.contains(r##"<a class="selected" href="#" onclick="dispatch('switchFilter', 'active')">Active</a>"##));
        assert!(html.contains(r##"<a class="" href="#" onclick="dispatch('switchFilter', 'all')">All</a>"##));
    }

    #[test]
    fn clear_completed_button_requires_a_completed_todo() {
        let active_only = vec![Todo::new("a")];
        let html = footer(&FooterProps {
            todos: &active_only,
            filter: Filter::All,
        })
        .render();
        assert!(!html.contains("clear-completed"));

        let with_done = vec![Todo::new("a"), done("b")];
        let html = footer(&FooterProps {
            todos: &with_done,
            filter: Filter::All,
        })
        .render();
        assert!(html.contains("clear-completed"));
    }
}
