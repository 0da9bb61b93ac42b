//! # Crosslice Core
//!
//! Cross-slice reducer composition.
//!
//! This crate combines multiple named "slice" reducers into a single
//! transition function over an aggregate state map. It works like a plain
//! per-key reducer combinator, with one twist: every slice reducer also
//! receives the next aggregate state *as built so far in the current
//! pass*, so slices evaluated later can read values freshly computed by
//! slices evaluated earlier.
//!
//! ## Core concepts
//!
//! - **[`SliceMap`]**: the aggregate state, a mapping from slice name to
//!   opaque slice value.
//! - **[`SliceReducerMap`]**: one ordered mapping of slice name to slice
//!   reducer `(previous, event, partial) -> next`.
//! - **[`CrossSliceReducer`]**: the combined transition, built by
//!   [`combine_cross_slice_reducers`].
//! - **[`ComposeError`]**: the single failure mode, raised when a slice
//!   reducer produces no value.
//!
//! ## Guarantees
//!
//! - The incoming state is never mutated; an unchanged pass hands the
//!   same `Arc` back, so callers can short-circuit on pointer identity.
//! - Maps run in supplied order, entries in definition order, and each
//!   entry's previous value is always drawn from the original incoming
//!   state, never from an earlier result of the same pass.
//! - The partial state contains only slices already computed this pass;
//!   not-yet-processed slices are absent from it.
//!
//! ## Example
//!
//! ```
//! use crosslice_core::{combine_cross_slice_reducers, SliceMap, SliceReducerMap};
//!
//! # fn main() -> Result<(), crosslice_core::ComposeError> {
//! let transition = combine_cross_slice_reducers(vec![
//!     SliceReducerMap::new().slice(
//!         "clicks",
//!         |prev: Option<&i64>, _event: &(), _partial: &SliceMap<i64>| {
//!             Some(prev.copied().unwrap_or(0) + 1)
//!         },
//!     ),
//!     SliceReducerMap::new().slice(
//!         "lead",
//!         |_prev: Option<&i64>, _event: &(), partial: &SliceMap<i64>| {
//!             partial.get("clicks").copied()
//!         },
//!     ),
//! ]);
//!
//! let first = transition.reduce(None, &())?;
//! assert_eq!(first.get("clicks"), Some(&1));
//! assert_eq!(first.get("lead"), Some(&1));
//!
//! let second = transition.reduce(Some(first), &())?;
//! assert_eq!(second.get("clicks"), Some(&2));
//! # Ok(())
//! # }
//! ```

pub mod composition;
pub mod error;
pub mod reducer;
pub mod state;

pub use composition::{CrossSliceReducer, combine_cross_slice_reducers};
pub use error::ComposeError;
pub use reducer::{SliceReducer, SliceReducerMap};
pub use state::SliceMap;

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
