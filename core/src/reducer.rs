//! Reducer trait - the core abstraction for state transitions.
//!
//! Reducers are pure transition functions: `(State, Action, Environment) →
//! State`. They read the current state and return a new value instead of
//! mutating shared data, so no view ever observes a half-applied transition.

/// The Reducer trait - core abstraction for business logic
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
/// - `Error`: Precondition violations surfaced to the caller
///
/// # Example
///
/// ```ignore
/// impl Reducer for TodoReducer {
///     type State = AppState;
///     type Action = TodoAction;
///     type Environment = TodoEnvironment;
///     type Error = TodoError;
///
///     fn reduce(
///         &self,
///         state: &AppState,
///         action: TodoAction,
///         env: &TodoEnvironment,
///     ) -> Result<AppState, TodoError> {
///         let mut next = state.clone();
///         match action {
///             // Business logic here
///         }
///         Ok(next)
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Precondition violations reported to the dispatcher
    type Error;

    /// Produce the next state for an action.
    ///
    /// This is a pure transition function: the current state is read, never
    /// mutated, and the successor state is returned by value. Side effects
    /// (persistence) go through collaborators on the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when an action violates a precondition, such as an
    /// index-based action referencing a slot outside the current state. In
    /// that case the caller keeps the previous state.
    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Self::State, Self::Error>;
}
