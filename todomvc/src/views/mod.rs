//! View components.
//!
//! Pure functions from props to a [`Node`](microstore_core::template::Node),
//! composed App → Header/TodoList/Footer → TodoItem. The inline
//! `dispatch(...)` handler strings in the markup are emitted verbatim as
//! inert text; nothing in this crate parses them.

pub mod app;
pub mod footer;
pub mod header;
pub mod todo_item;
pub mod todo_list;

pub use app::app;
pub use footer::{footer, FooterProps};
pub use header::header;
pub use todo_item::{todo_item, TodoItemProps};
pub use todo_list::{todo_list, TodoListProps};
