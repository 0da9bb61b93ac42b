//! Tally demo binary
//!
//! Runs a few events through the tally transition and prints the
//! aggregate state after each pass. Run with
//! `RUST_LOG=crosslice_core=trace` to watch per-slice reduction.

use crosslice_core::{ComposeError, SliceMap};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(state: &SliceMap<i64>) -> String {
    let mut slices: Vec<String> = state
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    slices.sort();
    slices.join("  ")
}

fn main() -> Result<(), ComposeError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_demo=debug,crosslice_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Tally Demo: cross-slice reduction ===\n");

    tracing::debug!("building tally transition");
    let transition = tally_demo::tally_transition();

    let events = [
        json!({"type": "click", "amount": 5}),
        json!({"type": "click", "amount": 2}),
        json!({"type": "ping"}),
    ];

    let mut state = None;
    for event in &events {
        println!(">>> Event: {event}");
        let next = transition.reduce(state, event)?;
        println!("    State: {}\n", render(&next));
        state = Some(next);
    }

    println!("=== Done ===");
    println!("\nKey behavior demonstrated:");
    println!("  • clicks/points are reduced first, from the incoming state");
    println!("  • lead (in a later map) reads their *fresh* values mid-pass");
    println!("  • unchanged passes would hand the incoming map back as-is");
    Ok(())
}
