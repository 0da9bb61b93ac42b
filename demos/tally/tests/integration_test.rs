//! Integration tests for the tally transition
//!
//! These tests exercise the full cross-slice flow: multiple passes,
//! partial-state reads, identity-stable replays, and the testing
//! harness.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crosslice_testing::TransitionTest;
use serde_json::json;
use tally_demo::tally_transition;

#[test]
fn accumulates_across_passes() {
    let transition = tally_transition();

    let first = transition
        .reduce(None, &json!({"type": "click", "amount": 5}))
        .unwrap();
    assert_eq!(first.get("clicks"), Some(&1));
    assert_eq!(first.get("points"), Some(&5));
    assert_eq!(first.get("lead"), Some(&4));

    let second = transition
        .reduce(Some(first), &json!({"type": "click", "amount": 2}))
        .unwrap();
    assert_eq!(second.get("clicks"), Some(&2));
    assert_eq!(second.get("points"), Some(&7));
    // lead = fresh points - fresh clicks, not the incoming values.
    assert_eq!(second.get("lead"), Some(&5));
}

#[test]
fn every_pass_counts_the_click() {
    TransitionTest::new(tally_transition())
        .given_slices([
            ("clicks".to_string(), 4),
            ("points".to_string(), 10),
            ("lead".to_string(), 6),
        ])
        .when_event(json!({"type": "ping"}))
        .then_state(|state| {
            assert_eq!(state.get("clicks"), Some(&5));
            assert_eq!(state.get("points"), Some(&10));
            assert_eq!(state.get("lead"), Some(&5));
        })
        .run();
}

#[test]
fn replaying_a_pass_is_deterministic() {
    let transition = tally_transition();
    let incoming = Arc::new(
        [
            ("clicks".to_string(), 1),
            ("points".to_string(), 3),
            ("lead".to_string(), 2),
        ]
        .into_iter()
        .collect::<crosslice_core::SliceMap<i64>>(),
    );
    let event = json!({"type": "click", "amount": 1});

    let a = transition.reduce(Some(Arc::clone(&incoming)), &event).unwrap();
    let b = transition.reduce(Some(incoming), &event).unwrap();

    assert_eq!(*a, *b);
    assert!(!Arc::ptr_eq(&a, &b));
}
