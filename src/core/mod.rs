//! Core building blocks of a state machine.
//!
//! - [`State`]: the handler table and enter/exit hooks of one named state
//! - [`Handler`]: how an event is handled, normalized into a [`Callback`]
//! - [`StateHistory`]: optional record of transitions

mod handler;
mod history;
mod state;

pub use handler::{Callback, Handler};
pub use history::{StateHistory, StateTransition};
pub(crate) use state::{is_lifecycle, is_reserved};
pub use state::{State, RESERVED_NAMES};
