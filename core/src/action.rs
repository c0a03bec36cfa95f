//! Action trait - named intents processed by reducers.
//!
//! An action is a named intent plus its arguments, the sole way to request a
//! state change. Applications model their actions as a closed enum, so every
//! transition is covered by an exhaustive match.

/// Common behavior for action enums.
pub trait Action {
    /// Stable name of this action, independent of its arguments.
    ///
    /// The logging middleware scopes its span by this name, the way a
    /// console log group would be scoped by the action string.
    fn name(&self) -> &'static str;
}
