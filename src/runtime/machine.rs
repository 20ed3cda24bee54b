//! The machine: state registry, current-state tracking, dispatch and
//! transitions.

use super::options::MachineOptions;
use super::state_ref::StateRef;
use super::trigger::Trigger;
use crate::core::{is_lifecycle, Callback, Handler, State, StateHistory, StateTransition};
use crate::definition::MachineDefinition;
use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, error, info, trace};

/// A synchronous finite state machine.
///
/// `A` is the type of the arguments carried by an emission. Handlers see
/// them as a slice; lifecycle hooks always see an empty slice.
///
/// Everything runs on the caller's thread and completes before the
/// triggering call returns. A handler that emits or transitions does so
/// immediately, nested inside the outer call. The machine holds no locks:
/// hosts sharing one across threads must serialize access themselves.
///
/// # Example
///
/// ```rust
/// use ssm::Machine;
///
/// let mut machine: Machine = Machine::new();
/// machine
///     .state("state1")
///     .on("event1", "state2")
///     .unwrap()
///     .state("state2")
///     .on("event1", "state1")
///     .unwrap()
///     .initialize("state1")
///     .unwrap();
///
/// machine.emit("event1", &[]).unwrap();
/// assert_eq!(machine.current().unwrap(), "state2");
///
/// machine.emit("event1", &[]).unwrap();
/// assert_eq!(machine.current().unwrap(), "state1");
/// ```
pub struct Machine<A = ()> {
    options: MachineOptions,
    states: HashMap<String, State<A>>,
    current: Option<String>,
    triggers: BTreeSet<String>,
    history: StateHistory,
    // Message of the last callback error already logged, so it is not
    // logged again while it unwinds through enclosing callbacks.
    reported: Option<String>,
}

impl<A: 'static> Machine<A> {
    /// Create an uninitialized machine with default options.
    pub fn new() -> Self {
        Self::with_options(MachineOptions::default())
    }

    pub fn with_options(options: MachineOptions) -> Self {
        Self {
            options,
            states: HashMap::new(),
            current: None,
            triggers: BTreeSet::new(),
            history: StateHistory::new(),
            reported: None,
        }
    }

    /// Build and initialize a machine from a declarative definition.
    pub fn from_definition(definition: &MachineDefinition) -> Result<Self> {
        definition.build()
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Get the state called `name`, creating it on first use.
    ///
    /// The returned handle registers handlers and chains into further
    /// `state` calls.
    pub fn state(&mut self, name: &str) -> StateRef<'_, A> {
        if !self.states.contains_key(name) {
            trace!(machine = %self.options.name, state = name, "creating state");
            self.states.insert(name.to_string(), State::new(name));
        }
        StateRef::new(self, name)
    }

    /// Look up an existing state without creating it.
    pub fn get_state(&self, name: &str) -> Option<&State<A>> {
        self.states.get(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Names of all registered states, sorted.
    pub fn state_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Make `name` the current state. Enter hooks are not run.
    ///
    /// Fails with [`Error::UnknownState`] if the state was never created,
    /// in which case the current state is left as it was.
    pub fn initialize(&mut self, name: &str) -> Result<&mut Self> {
        if !self.states.contains_key(name) {
            return Err(Error::UnknownState {
                name: name.to_string(),
            });
        }
        debug!(machine = %self.options.name, state = name, "initialized");
        self.current = Some(name.to_string());
        Ok(self)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Name of the current state.
    pub fn current(&self) -> Result<&str> {
        self.current.as_deref().ok_or(Error::NotInitialized)
    }

    /// The current [`State`] itself.
    pub fn current_state(&self) -> Result<&State<A>> {
        let name = self.current()?;
        self.states.get(name).ok_or_else(|| Error::UnknownState {
            name: name.to_string(),
        })
    }

    /// Every event name registered on any state, sorted.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.triggers.iter().map(String::as_str)
    }

    /// Trigger for `event`, if any state has ever registered it.
    ///
    /// Firing the trigger dispatches against whichever state is current at
    /// that moment, not the one the event was registered on.
    pub fn trigger(&self, event: &str) -> Option<Trigger> {
        self.triggers.get(event).map(|event| Trigger::new(event.clone()))
    }

    /// Transitions recorded so far (empty unless `record_history` is set).
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Forget every recorded transition.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Hand the recorded transitions to the caller, leaving the machine's
    /// history empty.
    pub fn take_history(&mut self) -> StateHistory {
        std::mem::take(&mut self.history)
    }

    /// Dispatch `event` to the handlers of the current state.
    ///
    /// Handlers run in registration order and the first error stops the
    /// dispatch. Errors from the dispatch itself (not initialized, event
    /// not handled by the current state) are returned without logging;
    /// errors raised by handlers are logged first when `log_exceptions` is
    /// set, then returned unchanged.
    pub fn emit(&mut self, event: &str, args: &[A]) -> Result<&mut Self> {
        let state = self.current()?.to_string();
        let handlers: Vec<Callback<A>> = self
            .states
            .get(&state)
            .and_then(|s| s.handlers(event))
            .map(<[_]>::to_vec)
            .ok_or_else(|| Error::EventNotDefined {
                event: event.to_string(),
                state: state.clone(),
            })?;

        if self.options.verbose {
            info!(
                machine = %self.options.name,
                state = %state,
                event,
                "{}: {}.{}",
                self.options.name,
                state,
                event
            );
        }

        let result = self.run_callbacks(&handlers, args);
        self.report(&state, result)?;
        Ok(self)
    }

    /// Transition to the state called `name`.
    ///
    /// Runs the exit hooks of the current state, switches, then runs the
    /// enter hooks of the new state. Going to the state that is already
    /// current does nothing at all.
    ///
    /// A failing exit hook leaves the old state current; a failing enter
    /// hook leaves the new state current.
    pub fn go(&mut self, name: &str) -> Result<&mut Self> {
        if !self.states.contains_key(name) {
            return Err(Error::UnknownState {
                name: name.to_string(),
            });
        }
        let from = self.current()?.to_string();
        if from == name {
            return Ok(self);
        }

        if self.options.verbose {
            info!(
                machine = %self.options.name,
                from = %from,
                to = name,
                "{}: {} -> {}",
                self.options.name,
                from,
                name
            );
        }

        let exit = self.hooks(&from, State::exit_hooks);
        let result = self.run_callbacks(&exit, &[]);
        self.report(&from, result)?;

        self.current = Some(name.to_string());
        if self.options.record_history {
            self.history.record(StateTransition::now(from, name));
        }

        let enter = self.hooks(name, State::enter_hooks);
        let result = self.run_callbacks(&enter, &[]);
        self.report(name, result)?;
        Ok(self)
    }

    pub(crate) fn register(&mut self, state: &str, event: &str, handler: Handler<A>) -> Result<()> {
        self.states
            .entry(state.to_string())
            .or_insert_with(|| State::new(state))
            .register(event, handler)?;

        if !is_lifecycle(event) && self.triggers.insert(event.to_string()) {
            trace!(machine = %self.options.name, event, "derived event trigger");
        }
        Ok(())
    }

    fn hooks(&self, state: &str, select: fn(&State<A>) -> &[Callback<A>]) -> Vec<Callback<A>> {
        self.states
            .get(state)
            .map(|s| select(s).to_vec())
            .unwrap_or_default()
    }

    // Callbacks are snapshotted by the caller, so they may register more
    // handlers or transition while running.
    fn run_callbacks(&mut self, callbacks: &[Callback<A>], args: &[A]) -> Result<()> {
        callbacks.iter().try_for_each(|callback| {
            self.reported = None;
            callback(self, args)
        })
    }

    // Logs at the frame the error first leaves a callback. An error that a
    // nested emit or go already logged is passed through silently, whether
    // or not an enclosing handler later recovers from it.
    fn report(&mut self, state: &str, result: Result<()>) -> Result<()> {
        if let Err(err) = &result {
            let message = err.to_string();
            if self.options.log_exceptions && self.reported.as_deref() != Some(message.as_str()) {
                error!(
                    machine = %self.options.name,
                    state,
                    error = %err,
                    "{}: {} ! {}",
                    self.options.name,
                    state,
                    err
                );
            }
            self.reported = Some(message);
        }
        result
    }
}

impl<A: 'static> Default for Machine<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Machine<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<&State<A>> = self.states.values().collect();
        states.sort_unstable_by(|a, b| a.name().cmp(b.name()));

        f.debug_struct("Machine")
            .field("name", &self.options.name)
            .field("current", &self.current)
            .field("states", &states)
            .finish()
    }
}
