//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Transition shorthand: a state name as the handler
//! - Enter hooks for side effects
//! - Per-event methods generated by `event_triggers!`
//!
//! Run with: cargo run --example traffic_light

use ssm::{event_triggers, Handler, Machine, MachineOptions};

event_triggers! {
    trait TrafficEvents {
        timer,
    }
}

fn announce(message: &'static str) -> Handler<()> {
    Handler::call(move |machine, _| {
        println!("  [{}] {}", machine.current()?, message);
        Ok(())
    })
}

fn main() -> ssm::Result<()> {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine: Machine =
        Machine::with_options(MachineOptions::new().with_name("traffic").record_history(true));
    machine
        .state("red")
        .on("timer", "green")?
        .on("enter", announce("Stop"))?
        .state("green")
        .on("timer", "yellow")?
        .on("enter", announce("Go!"))?
        .state("yellow")
        .on("timer", "red")?
        .on("enter", announce("Caution"))?
        .initialize("red")?;

    println!("Initial state: {}\n", machine.current()?);

    println!("Transition sequence:");
    for _ in 0..6 {
        machine.timer(&[])?;
    }

    println!("\nPath: {}", machine.history().get_path().join(" -> "));

    println!("\nKey Characteristics:");
    println!("- No final state (cycles indefinitely)");
    println!("- Hooks fire only on real transitions");

    println!("\n=== Example Complete ===");
    Ok(())
}
