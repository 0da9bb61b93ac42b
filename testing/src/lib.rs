//! # Crosslice Testing
//!
//! Testing utilities and helpers for cross-slice transitions.
//!
//! This crate provides:
//! - [`TransitionTest`]: a fluent Given-When-Then harness for combined
//!   transitions, including pointer-identity and failure assertions
//! - [`RecordingReducer`]: mock slice reducers that capture every call's
//!   arguments (previous value, event, partial-state snapshot)
//!
//! ## Example
//!
//! ```
//! use crosslice_core::{SliceMap, SliceReducerMap, combine_cross_slice_reducers};
//! use crosslice_testing::TransitionTest;
//!
//! let transition = combine_cross_slice_reducers(vec![SliceReducerMap::new().slice(
//!     "clicks",
//!     |prev: Option<&i64>, _event: &(), _partial: &SliceMap<i64>| {
//!         Some(prev.copied().unwrap_or(0) + 1)
//!     },
//! )]);
//!
//! TransitionTest::new(transition)
//!     .when_event(())
//!     .then_state(|state| {
//!         assert_eq!(state.get("clicks"), Some(&1));
//!     })
//!     .run();
//! ```

pub mod recording;

pub use recording::{RecordedCall, RecordingReducer};
pub use transition_test::TransitionTest;
