//! Declarative machine definitions.
//!
//! A definition describes states and their transitions as data, typically
//! JSON:
//!
//! ```json
//! {
//!   "options": { "name": "door", "verbose": true },
//!   "initial": "closed",
//!   "states": {
//!     "closed": { "on": { "open": "opened", "knock": null } },
//!     "opened": { "on": { "close": "closed" } }
//!   }
//! }
//! ```
//!
//! Each `on` value is a handler: a string transitions to that state and
//! `null` accepts the event without doing anything. Behavior that needs
//! code is added afterwards through [`Machine::state`].

use crate::core::{is_reserved, Handler};
use crate::error::{Error, Result};
use crate::runtime::{Machine, MachineOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Handlers declared for one state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub on: BTreeMap<String, Value>,
}

impl StateDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition on `event` to `target`.
    pub fn transition(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.on.insert(event.into(), Value::String(target.into()));
        self
    }

    /// Accept `event` without doing anything.
    pub fn ignore(mut self, event: impl Into<String>) -> Self {
        self.on.insert(event.into(), Value::Null);
        self
    }
}

/// A whole machine as data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineDefinition {
    #[serde(default)]
    pub options: MachineOptions,
    pub initial: String,
    #[serde(default)]
    pub states: BTreeMap<String, StateDefinition>,
}

impl MachineDefinition {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            options: MachineOptions::default(),
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    pub fn with_options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a definition from JSON. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Definition(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Definition(e.to_string()))
    }

    /// Check the definition without building a machine.
    ///
    /// The initial state and every transition target must be declared,
    /// handlers must be strings or null, and no event may use a reserved
    /// name.
    pub fn validate(&self) -> Result<()> {
        if self.initial.is_empty() {
            return Err(Error::Definition(
                "initial state cannot be empty".to_string(),
            ));
        }
        if !self.states.contains_key(&self.initial) {
            return Err(Error::Definition(format!(
                "initial state '{}' not found in states",
                self.initial
            )));
        }

        for (name, state) in &self.states {
            for (event, value) in &state.on {
                if is_reserved(event) {
                    return Err(Error::ReservedName {
                        name: event.clone(),
                    });
                }
                if let Handler::TransitionTo(target) = Handler::<()>::try_from(value)? {
                    if !self.states.contains_key(&target) {
                        return Err(Error::Definition(format!(
                            "state '{name}' handles '{event}' with a transition to unknown state '{target}'"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate, then build and initialize a machine.
    pub fn build<A: 'static>(&self) -> Result<Machine<A>> {
        self.validate()?;

        let mut machine = Machine::with_options(self.options.clone());
        for (name, state) in &self.states {
            let mut handle = machine.state(name);
            for (event, value) in &state.on {
                handle = handle.on(event, Handler::try_from(value)?)?;
            }
        }
        machine.initialize(&self.initial)?;
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOOR: &str = r#"
    {
      "options": { "name": "door" },
      "initial": "closed",
      "states": {
        "closed": { "on": { "open": "opened", "knock": null } },
        "opened": { "on": { "close": "closed" } },
        "broken": {}
      }
    }"#;

    #[test]
    fn parses_and_builds_machine() {
        let definition = MachineDefinition::from_json(DOOR).unwrap();
        let mut machine: Machine = definition.build().unwrap();

        assert_eq!(machine.name(), "door");
        assert_eq!(machine.current().unwrap(), "closed");
        assert_eq!(machine.state_names(), vec!["broken", "closed", "opened"]);

        machine.emit("knock", &[]).unwrap();
        assert_eq!(machine.current().unwrap(), "closed");

        machine.emit("open", &[]).unwrap();
        assert_eq!(machine.current().unwrap(), "opened");
    }

    #[test]
    fn options_default_when_omitted() {
        let definition =
            MachineDefinition::from_json(r#"{"initial": "a", "states": {"a": {}}}"#).unwrap();

        assert_eq!(definition.options, MachineOptions::default());
    }

    #[test]
    fn malformed_json_is_a_definition_error() {
        let err = MachineDefinition::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Definition(_)));
    }

    #[test]
    fn missing_initial_state_is_rejected() {
        let definition = MachineDefinition::new("nowhere").state("a", StateDefinition::new());

        let err = definition.validate().unwrap_err();

        assert!(err.to_string().contains("'nowhere' not found"));
    }

    #[test]
    fn empty_initial_state_is_rejected() {
        let definition = MachineDefinition::new("");
        assert!(matches!(definition.validate(), Err(Error::Definition(_))));
    }

    #[test]
    fn unknown_transition_target_is_rejected() {
        let definition = MachineDefinition::new("a")
            .state("a", StateDefinition::new().transition("jump", "nowhere"));

        let err = definition.validate().unwrap_err();

        assert!(err.to_string().contains("unknown state 'nowhere'"));
    }

    #[test]
    fn non_string_handler_is_invalid() {
        let mut state = StateDefinition::new();
        state.on.insert("open".to_string(), json!(3));
        let definition = MachineDefinition::new("a").state("a", state);

        assert!(matches!(
            definition.build::<()>(),
            Err(Error::InvalidHandler { ref found }) if found == "number"
        ));
    }

    #[test]
    fn reserved_event_is_rejected() {
        let definition =
            MachineDefinition::new("a").state("a", StateDefinition::new().transition("go", "a"));

        assert!(matches!(
            definition.validate(),
            Err(Error::ReservedName { ref name }) if name == "go"
        ));
    }

    #[test]
    fn built_machine_accepts_extra_callbacks() {
        let definition = MachineDefinition::new("idle")
            .state("idle", StateDefinition::new().transition("start", "busy"))
            .state("busy", StateDefinition::new().ignore("tick"));
        let mut machine: Machine = Machine::from_definition(&definition).unwrap();

        machine
            .state("busy")
            .on("tick", "idle")
            .unwrap()
            .emit("start", &[])
            .unwrap()
            .emit("tick", &[])
            .unwrap();

        assert_eq!(machine.current().unwrap(), "idle");
    }

    #[test]
    fn definition_survives_json_round_trip() {
        let definition = MachineDefinition::from_json(DOOR).unwrap();
        let json = definition.to_json().unwrap();

        assert_eq!(MachineDefinition::from_json(&json).unwrap(), definition);
    }
}
