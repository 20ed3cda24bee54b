//! Chainable handle onto one state of a machine.

use super::machine::Machine;
use crate::core::{Handler, State};
use crate::error::Result;

/// Mutable handle to a state, returned by [`Machine::state`].
///
/// Registration returns the handle again, and `state` hops to another
/// state, so a whole machine can be declared in one expression:
///
/// ```rust
/// use ssm::Machine;
///
/// let mut machine: Machine = Machine::new();
/// machine
///     .state("green")
///     .on("timer", "yellow")?
///     .state("yellow")
///     .on("timer", "red")?
///     .state("red")
///     .on("timer", "green")?
///     .initialize("green")?;
///
/// assert_eq!(machine.current()?, "green");
/// # Ok::<(), ssm::Error>(())
/// ```
pub struct StateRef<'m, A> {
    machine: &'m mut Machine<A>,
    name: String,
}

impl<'m, A: 'static> StateRef<'m, A> {
    pub(crate) fn new(machine: &'m mut Machine<A>, name: &str) -> Self {
        Self {
            machine,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a handler for `event` on this state.
    ///
    /// Accepts anything convertible into a [`Handler`]: a state name
    /// (`&str`/`String`), [`Handler::call`], or [`Handler::Noop`].
    pub fn on(self, event: &str, handler: impl Into<Handler<A>>) -> Result<Self> {
        self.machine.register(&self.name, event, handler.into())?;
        Ok(self)
    }

    /// Continue the chain on another state, creating it if needed.
    pub fn state(self, name: &str) -> StateRef<'m, A> {
        let machine = self.machine;
        machine.state(name)
    }

    /// See [`Machine::initialize`].
    pub fn initialize(self, name: &str) -> Result<&'m mut Machine<A>> {
        let machine = self.machine;
        machine.initialize(name)
    }

    /// Emit on the machine. Dispatch uses the *current* state, which need
    /// not be this one.
    pub fn emit(self, event: &str, args: &[A]) -> Result<&'m mut Machine<A>> {
        let machine = self.machine;
        machine.emit(event, args)
    }

    /// Inspect the registrations of this state.
    pub fn get(&self) -> Option<&State<A>> {
        self.machine.get_state(&self.name)
    }

    /// End the chain and hand back the machine.
    pub fn machine(self) -> &'m mut Machine<A> {
        self.machine
    }
}
