//! A single named state: its event handlers and its enter/exit hooks.

use super::handler::{Callback, Handler};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Event names that collide with machine operations and can never be
/// registered as ordinary events.
pub const RESERVED_NAMES: [&str; 4] = ["state", "go", "initialize", "current"];

/// Lifecycle event run when a state becomes current.
const ENTER: &str = "enter";

/// Lifecycle event run when a state stops being current.
const EXIT: &str = "exit";

/// Check whether `name` is reserved for the machine API.
pub(crate) fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Check whether `name` registers a hook rather than an event handler.
pub(crate) fn is_lifecycle(name: &str) -> bool {
    name == ENTER || name == EXIT
}

/// Handler and hook registrations for one named state.
///
/// States are owned by a [`Machine`](crate::Machine) and created lazily by
/// [`Machine::state`](crate::Machine::state). Every handler registered for
/// an event is kept: a second registration for the same event adds to the
/// first rather than replacing it, and dispatch runs them in registration
/// order.
pub struct State<A> {
    name: String,
    events: HashMap<String, Vec<Callback<A>>>,
    enter: Vec<Callback<A>>,
    exit: Vec<Callback<A>>,
}

impl<A> State<A> {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: HashMap::new(),
            enter: Vec::new(),
            exit: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this state has at least one handler for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Number of handlers registered for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    /// Names of the events this state handles, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    pub fn enter_hook_count(&self) -> usize {
        self.enter.len()
    }

    pub fn exit_hook_count(&self) -> usize {
        self.exit.len()
    }

    pub(crate) fn handlers(&self, event: &str) -> Option<&[Callback<A>]> {
        self.events.get(event).map(Vec::as_slice)
    }

    pub(crate) fn enter_hooks(&self) -> &[Callback<A>] {
        &self.enter
    }

    pub(crate) fn exit_hooks(&self) -> &[Callback<A>] {
        &self.exit
    }
}

impl<A: 'static> State<A> {
    /// Register `handler` for `event` on this state.
    ///
    /// `"enter"` and `"exit"` append lifecycle hooks. Reserved names fail
    /// with [`Error::ReservedName`] and leave the state untouched.
    pub fn register(&mut self, event: &str, handler: Handler<A>) -> Result<()> {
        match event {
            ENTER => self.enter.push(handler.into_callback()),
            EXIT => self.exit.push(handler.into_callback()),
            _ if is_reserved(event) => {
                return Err(Error::ReservedName {
                    name: event.to_string(),
                })
            }
            _ => self
                .events
                .entry(event.to_string())
                .or_default()
                .push(handler.into_callback()),
        }
        Ok(())
    }
}

impl<A> fmt::Debug for State<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<(&str, usize)> = self
            .events
            .iter()
            .map(|(event, handlers)| (event.as_str(), handlers.len()))
            .collect();
        events.sort_unstable();

        f.debug_struct("State")
            .field("name", &self.name)
            .field("events", &events)
            .field("enter", &self.enter.len())
            .field("exit", &self.exit.len())
            .finish()
    }
}
