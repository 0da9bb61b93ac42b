//! # Tally Demo
//!
//! A small running tally demonstrating cross-slice reduction.
//!
//! Three slices over `i64` values, split across two reducer maps:
//! - `clicks` counts events,
//! - `points` accumulates the `amount` field of each event,
//! - `lead` (in a *later* map) reads the freshly computed `clicks` and
//!   `points` from the partial next state and keeps their difference.
//!
//! The third slice is the point of the exercise: it never looks at the
//! incoming aggregate state, only at sibling values produced earlier in
//! the same pass.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use tally_demo::tally_transition;
//!
//! # fn main() -> Result<(), crosslice_core::ComposeError> {
//! let transition = tally_transition();
//! let state = transition.reduce(None, &json!({"type": "click", "amount": 5}))?;
//!
//! assert_eq!(state.get("clicks"), Some(&1));
//! assert_eq!(state.get("points"), Some(&5));
//! assert_eq!(state.get("lead"), Some(&4));
//! # Ok(())
//! # }
//! ```

use crosslice_core::{CrossSliceReducer, SliceMap, SliceReducerMap, combine_cross_slice_reducers};
use serde_json::Value;

/// Build the tally transition.
///
/// Events are opaque JSON objects; only the optional integer `amount`
/// field is interpreted (missing or non-integer amounts count as 0).
#[must_use]
pub fn tally_transition() -> CrossSliceReducer<i64, Value> {
    combine_cross_slice_reducers(vec![
        SliceReducerMap::new()
            .slice(
                "clicks",
                |prev: Option<&i64>, _event: &Value, _partial: &SliceMap<i64>| {
                    Some(prev.copied().unwrap_or(0) + 1)
                },
            )
            .slice(
                "points",
                |prev: Option<&i64>, event: &Value, _partial: &SliceMap<i64>| {
                    let amount = event.get("amount").and_then(Value::as_i64).unwrap_or(0);
                    Some(prev.copied().unwrap_or(0) + amount)
                },
            ),
        SliceReducerMap::new().slice(
            "lead",
            |_prev: Option<&i64>, _event: &Value, partial: &SliceMap<i64>| {
                // Both siblings were recomputed earlier in this pass.
                let clicks = partial.get("clicks").copied().unwrap_or(0);
                let points = partial.get("points").copied().unwrap_or(0);
                Some(points - clicks)
            },
        ),
    ])
}
