//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Name used in log lines when none is configured.
pub const DEFAULT_MACHINE_NAME: &str = "StateMachine";

/// Options recognized by [`Machine`](crate::Machine).
///
/// Deserializes with every field optional, so `{}` yields the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Identifier used in log lines.
    pub name: String,

    /// Log every event dispatch and every transition.
    pub verbose: bool,

    /// Log errors raised by handlers and hooks before returning them.
    pub log_exceptions: bool,

    /// Keep a [`StateHistory`](crate::StateHistory) of transitions.
    pub record_history: bool,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            verbose: false,
            log_exceptions: false,
            record_history: false,
        }
    }
}

impl MachineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn log_exceptions(mut self, log_exceptions: bool) -> Self {
        self.log_exceptions = log_exceptions;
        self
    }

    pub fn record_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }
}
