//! # Microstore Testing
//!
//! Testing utilities and helpers for the microstore architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducers
//! - Mock implementations of environment traits
//!
//! ## Example
//!
//! ```ignore
//! use microstore_testing::ReducerTest;
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(AppState::default())
//!     .when_action(TodoAction::Add("Buy milk".to_string()))
//!     .then_state(|state| {
//!         assert_eq!(state.todos.len(), 1);
//!     })
//!     .run();
//! ```

pub mod mocks;

pub use mocks::MemoryStore;
pub use reducer_test::ReducerTest;
