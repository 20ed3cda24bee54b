//! Errors raised by machine operations and by user callbacks.

use thiserror::Error;

/// Boxed error produced by user-supplied handlers and hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or driving a state machine.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs a current state ran before `initialize`.
    #[error("the state machine has not been initialized")]
    NotInitialized,

    #[error("{name} state is not defined")]
    UnknownState { name: String },

    #[error("{event} event not defined for {state} state")]
    EventNotDefined { event: String, state: String },

    #[error("{name} method is reserved for the api")]
    ReservedName { name: String },

    /// A dynamic handler value was neither a state name nor null.
    #[error("invalid event handler: expected a state name or null, found {found}")]
    InvalidHandler { found: String },

    #[error("invalid machine definition: {0}")]
    Definition(String),

    /// Raised from inside a handler or hook; passed through untouched.
    #[error(transparent)]
    Callback(#[from] BoxError),
}

impl Error {
    /// Wrap an arbitrary error (or message) raised by user code.
    ///
    /// ```
    /// let err = ssm::Error::callback("boom");
    /// assert_eq!(err.to_string(), "boom");
    /// ```
    pub fn callback(err: impl Into<BoxError>) -> Self {
        Error::Callback(err.into())
    }

    /// True for errors that came out of user code rather than the machine.
    pub fn is_callback(&self) -> bool {
        matches!(self, Error::Callback(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
