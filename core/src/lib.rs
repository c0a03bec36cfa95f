//! # Microstore Core
//!
//! Core traits and types for the microstore architecture.
//!
//! This crate provides the fundamental abstractions for building small
//! reducer-driven applications that re-render string views on every state
//! change.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for the application
//! - **Action**: A closed enum of every possible state transition
//! - **Reducer**: Pure transition function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//! - **Template**: A closed node variant rendered to an HTML string
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: action → reducer → new state → render
//! - Transition functions return new state values (no shared mutation)
//! - Exhaustive matching over a closed action enum
//! - Dependency injection via the Environment parameter
//!
//! ## Example
//!
//! ```
//! use microstore_core::action::Action;
//! use microstore_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             CounterAction::Increment => "increment",
//!             CounterAction::Decrement => "decrement",
//!         }
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Result<CounterState, Self::Error> {
//!         let count = match action {
//!             CounterAction::Increment => state.count + 1,
//!             CounterAction::Decrement => state.count - 1,
//!         };
//!         Ok(CounterState { count })
//!     }
//! }
//! ```

pub mod action;
pub mod environment;
pub mod middleware;
pub mod reducer;
pub mod template;

pub use action::Action;
pub use environment::{KeyValueStore, StorageError};
pub use middleware::Logging;
pub use reducer::Reducer;
pub use template::Node;
