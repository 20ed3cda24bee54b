//! Handler specifications and their normalized callable form.
//!
//! A handler can be given three ways: a closure, the name of a state to
//! transition to, or nothing at all. Each form is resolved once, at
//! registration, into a uniform [`Callback`] so dispatch never has to
//! branch on what kind of handler it is running.

use crate::error::{Error, Result};
use crate::runtime::Machine;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Normalized event handler or lifecycle hook.
///
/// Receives the machine it runs on, so it can call [`Machine::go`] or
/// [`Machine::emit`], plus the arguments passed to the emission. Hooks
/// are invoked with an empty argument slice.
pub type Callback<A> = Arc<dyn Fn(&mut Machine<A>, &[A]) -> Result<()> + Send + Sync>;

/// How an event or hook should be handled.
///
/// # Example
///
/// ```rust
/// use ssm::{Handler, Machine};
///
/// let mut machine: Machine = Machine::new();
/// machine
///     .state("idle")
///     .on("start", "running")
///     .unwrap()
///     .on("poke", Handler::Noop)
///     .unwrap()
///     .on("log", Handler::call(|m: &mut Machine, _: &[()]| {
///         println!("still in {}", m.current()?);
///         Ok(())
///     }))
///     .unwrap()
///     .state("running");
///
/// machine.initialize("idle").unwrap();
/// machine.emit("start", &[]).unwrap();
/// assert_eq!(machine.current().unwrap(), "running");
/// ```
pub enum Handler<A> {
    /// Arbitrary user code.
    Callable(Callback<A>),
    /// Shorthand for a callable that performs `go(name)`.
    TransitionTo(String),
    /// Does nothing; registering it still makes the event legal.
    Noop,
}

impl<A: 'static> Handler<A> {
    /// Wrap a closure as a handler.
    pub fn call<F>(f: F) -> Self
    where
        F: Fn(&mut Machine<A>, &[A]) -> Result<()> + Send + Sync + 'static,
    {
        Handler::Callable(Arc::new(f))
    }

    /// Handler that transitions to `state`.
    pub fn to(state: impl Into<String>) -> Self {
        Handler::TransitionTo(state.into())
    }

    /// Resolve this specification into the callable stored on a state.
    pub fn into_callback(self) -> Callback<A> {
        match self {
            Handler::Callable(callback) => callback,
            Handler::TransitionTo(target) => {
                Arc::new(move |machine: &mut Machine<A>, _: &[A]| {
                    machine.go(&target).map(|_| ())
                })
            }
            Handler::Noop => Arc::new(|_: &mut Machine<A>, _: &[A]| Ok(())),
        }
    }
}

impl<A> Default for Handler<A> {
    fn default() -> Self {
        Handler::Noop
    }
}

impl<A> From<&str> for Handler<A> {
    fn from(target: &str) -> Self {
        Handler::TransitionTo(target.to_string())
    }
}

impl<A> From<String> for Handler<A> {
    fn from(target: String) -> Self {
        Handler::TransitionTo(target)
    }
}

impl<A> From<Callback<A>> for Handler<A> {
    fn from(callback: Callback<A>) -> Self {
        Handler::Callable(callback)
    }
}

/// Dynamic handlers, as found in declarative definitions: a string names
/// the target state, `null` is a no-op, anything else is rejected.
impl<A> TryFrom<&Value> for Handler<A> {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(target) => Ok(Handler::TransitionTo(target.clone())),
            Value::Null => Ok(Handler::Noop),
            other => Err(Error::InvalidHandler {
                found: json_type(other).to_string(),
            }),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Callable(_) => f.write_str("Callable(..)"),
            Handler::TransitionTo(target) => f.debug_tuple("TransitionTo").field(target).finish(),
            Handler::Noop => f.write_str("Noop"),
        }
    }
}
