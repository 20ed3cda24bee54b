//! The state machine runtime.
//!
//! # Key Concepts
//!
//! - **Machine**: owns the states, tracks the current one, dispatches events
//! - **StateRef**: chainable handle used to declare states and handlers
//! - **Trigger**: a named event that can be fired later against any state
//! - **Options**: machine name and logging switches

mod machine;
mod options;
mod state_ref;
mod trigger;

pub use machine::Machine;
pub use options::{MachineOptions, DEFAULT_MACHINE_NAME};
pub use state_ref::StateRef;
pub use trigger::Trigger;
