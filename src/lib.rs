//! SSM: a minimal, synchronous finite state machine runtime
//!
//! A host declares named states, attaches event handlers and enter/exit
//! hooks to each of them, then drives the machine by emitting events.
//! Everything runs to completion on the caller's thread.
//!
//! # Core Concepts
//!
//! - **State**: a named mode holding its own event handlers and hooks
//! - **Event**: a name that, emitted while a state is current, runs that
//!   state's handlers for it
//! - **Transition**: `go(name)` runs the old state's exit hooks, switches,
//!   then runs the new state's enter hooks
//! - **Handler**: a closure, a state name (transition shorthand) or a no-op
//!
//! # Example
//!
//! ```rust
//! use ssm::{Handler, Machine, MachineOptions};
//! use std::sync::{Arc, Mutex};
//!
//! let entered = Arc::new(Mutex::new(0));
//! let counter = Arc::clone(&entered);
//!
//! let mut machine: Machine =
//!     Machine::with_options(MachineOptions::new().with_name("link").verbose(true));
//! machine
//!     .state("disconnected")
//!     .on("dial", "connecting")?
//!     .state("connecting")
//!     .on("ack", "connected")?
//!     .on("reject", "disconnected")?
//!     .state("connected")
//!     .on("enter", Handler::call(move |_, _| {
//!         *counter.lock().unwrap() += 1;
//!         Ok(())
//!     }))?
//!     .on("hangup", "disconnected")?
//!     .initialize("disconnected")?;
//!
//! machine.emit("dial", &[])?.emit("ack", &[])?;
//! assert_eq!(machine.current()?, "connected");
//! assert_eq!(*entered.lock().unwrap(), 1);
//! # Ok::<(), ssm::Error>(())
//! ```
//!
//! # Logging
//!
//! The machine reports through [`tracing`]. With `verbose` set in
//! [`MachineOptions`] every dispatch (`name: state.event`) and
//! transition (`name: from -> to`) is logged at `INFO`; with
//! `log_exceptions` errors raised by handlers and hooks
//! are logged at `ERROR` (`name: state ! message`) before being returned.
//! Installing a subscriber is left to the host.

pub mod core;
pub mod definition;
pub mod error;
mod macros;
pub mod runtime;

// Re-export commonly used types
pub use crate::core::{Callback, Handler, State, StateHistory, StateTransition, RESERVED_NAMES};
pub use definition::{MachineDefinition, StateDefinition};
pub use error::{BoxError, Error, Result};
pub use runtime::{Machine, MachineOptions, StateRef, Trigger};
