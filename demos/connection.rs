//! Connection Lifecycle
//!
//! This example builds a machine from a JSON definition, then adds
//! behavior in code.
//!
//! Key concepts:
//! - Declarative states and transitions
//! - Callbacks that inspect event arguments and decide where to go
//! - Verbose and exception logging through `tracing`
//!
//! Run with: RUST_LOG=info cargo run --example connection

use ssm::{Error, Handler, Machine, MachineDefinition};

const DEFINITION: &str = r#"
{
  "options": { "name": "conn", "verbose": true, "log_exceptions": true },
  "initial": "disconnected",
  "states": {
    "disconnected": { "on": { "dial": "connecting" } },
    "connecting":   { "on": { "timeout": "disconnected" } },
    "connected":    { "on": { "hangup": "disconnected", "keepalive": null } }
  }
}
"#;

fn main() -> ssm::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "ssm=info".to_string()))
        .init();

    println!("=== Connection Lifecycle ===\n");

    let definition = MachineDefinition::from_json(DEFINITION)?;
    let mut machine: Machine<u16> = Machine::from_definition(&definition)?;

    machine
        .state("connecting")
        .on(
            "reply",
            Handler::call(|m, codes: &[u16]| match codes.first().copied() {
                Some(200) => m.go("connected").map(|_| ()),
                Some(code) => Err(Error::callback(format!("handshake refused with {code}"))),
                None => Err(Error::callback("empty reply")),
            }),
        )?
        .state("connected")
        .on(
            "enter",
            Handler::call(|_, _| {
                println!("  link is up");
                Ok(())
            }),
        )?;

    machine.emit("dial", &[])?;
    if let Err(err) = machine.emit("reply", &[503]) {
        println!("  first attempt failed: {err}");
    }
    machine.emit("timeout", &[])?;

    machine
        .emit("dial", &[])?
        .emit("reply", &[200])?
        .emit("keepalive", &[])?
        .emit("hangup", &[])?;

    println!("\nFinal state: {}", machine.current()?);
    println!("\n=== Example Complete ===");
    Ok(())
}
