//! Reusable event triggers.

use super::machine::Machine;
use crate::error::Result;
use std::fmt;

/// Callable stand-in for one event name.
///
/// Obtained from [`Machine::trigger`] once any state registers the event.
/// A trigger holds only the event name: which state's handlers run is
/// decided when it fires, against the machine's current state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trigger {
    event: String,
}

impl Trigger {
    pub(crate) fn new(event: String) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// Same as `machine.emit(self.event(), args)`.
    pub fn fire<'m, A: 'static>(
        &self,
        machine: &'m mut Machine<A>,
        args: &[A],
    ) -> Result<&'m mut Machine<A>> {
        machine.emit(&self.event, args)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.event)
    }
}
