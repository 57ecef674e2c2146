//! Errors reported to callbacks while statements run.

use serde::Serialize;

/// An error raised by the database while executing a statement.
///
/// Callbacks receive these and may mark them as handled, in which case the
/// caller does not fail the script because of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message} (code: {code}, state: {state})")]
pub struct ExecutionError {
    code: i32,
    state: String,
    message: String,
    handled: bool,
}

impl ExecutionError {
    /// Creates an unhandled error.
    #[must_use]
    pub fn new(code: i32, state: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            state: state.into(),
            message: message.into(),
            handled: false,
        }
    }

    /// Returns the vendor error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the SQL state.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether a callback has handled the error.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.handled
    }

    /// Marks the error as handled, so it is not reported further.
    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}
