//! Application header: heading plus the new-todo input.

use microstore_core::template::Node;

/// Renders the header. Takes no props.
#[must_use]
pub fn header() -> Node {
    Node::text(
        r#"<header class="header">
    <h1>todos</h1>
    <input class="new-todo" placeholder="What needs to be done?" autofocus
        onkeyup="event.keyCode === 13 && dispatch('add', this.value.trim())">
</header>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_carries_the_new_todo_input() {
        let html = header().render();
        assert!(html.contains("<h1>todos</h1>"));
        assert!(html.contains(r#"class="new-todo""#));
    }
}
