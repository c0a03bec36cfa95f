//! Logging middleware - an observability decorator for reducers.
//!
//! Wraps a reducer with an identical signature and logs, in order, the
//! previous state, the action with its arguments, and the resulting state
//! (or the rejection) inside a span scoped by the action name. The span is
//! the structured analog of a console log group.

use std::fmt::Debug;

use crate::action::Action;
use crate::reducer::Reducer;

/// Reducer decorator that traces every transition.
///
/// The wrapper never alters dispatch semantics: the inner reducer's result
/// is returned untouched. Ordering is guaranteed by construction - the
/// previous state is logged before delegating, the next state after.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logging<R> {
    inner: R,
}

impl<R> Logging<R> {
    /// Wraps `inner` with transition logging.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consumes the wrapper and returns the inner reducer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Reducer for Logging<R>
where
    R: Reducer,
    R::State: Debug,
    R::Action: Debug + Action,
    R::Error: Debug,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;
    type Error = R::Error;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Self::State, Self::Error> {
        let span = tracing::debug_span!("dispatch", action = action.name());
        let _guard = span.enter();

        tracing::debug!(state = ?state, "previous state");
        tracing::debug!(arguments = ?action, "action");

        let result = self.inner.reduce(state, action, env);

        match &result {
            Ok(next) => tracing::debug!(state = ?next, "next state"),
            Err(error) => tracing::debug!(error = ?error, "action rejected"),
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct TestState {
        count: i64,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Fail,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "increment",
                TestAction::Fail => "fail",
            }
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Rejected;

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();
        type Error = Rejected;

        fn reduce(
            &self,
            state: &TestState,
            action: TestAction,
            _env: &(),
        ) -> Result<TestState, Rejected> {
            match action {
                TestAction::Increment => Ok(TestState { count: state.count + 1 }),
                TestAction::Fail => Err(Rejected),
            }
        }
    }

    #[test]
    fn success_passes_through_unchanged() {
        let plain = TestReducer
            .reduce(&TestState { count: 3 }, TestAction::Increment, &())
            .unwrap();
        let logged = Logging::new(TestReducer)
            .reduce(&TestState { count: 3 }, TestAction::Increment, &())
            .unwrap();
        assert_eq!(plain, logged);
    }

    #[test]
    fn error_passes_through_unchanged() {
        let result = Logging::new(TestReducer).reduce(
            &TestState { count: 0 },
            TestAction::Fail,
            &(),
        );
        assert_eq!(result.unwrap_err(), Rejected);
    }

    #[test]
    fn into_inner_returns_wrapped_reducer() {
        let inner = Logging::new(TestReducer).into_inner();
        let next = inner
            .reduce(&TestState { count: 0 }, TestAction::Increment, &())
            .unwrap();
        assert_eq!(next.count, 1);
    }
}
