//! Cross-slice reducer composition
//!
//! [`combine_cross_slice_reducers`] builds a single transition out of one
//! or more [`SliceReducerMap`]s. It works like a plain combine-by-key
//! reducer combinator with one addition: each slice reducer also receives
//! the next aggregate state *as built so far in the current pass*, so
//! reducers later in the pass can read values already recomputed by
//! earlier ones.
//!
//! The partial state is deliberately the accumulating next map, not the
//! incoming state and not a merge of the two: a slice not yet processed in
//! the pass is simply absent from it, and downstream reducers must handle
//! that case.
//!
//! # Example
//!
//! ```
//! use crosslice_core::{combine_cross_slice_reducers, SliceMap, SliceReducerMap};
//!
//! # fn main() -> Result<(), crosslice_core::ComposeError> {
//! let transition = combine_cross_slice_reducers(vec![
//!     SliceReducerMap::new().slice(
//!         "a",
//!         |prev: Option<&i64>, _event: &(), _partial: &SliceMap<i64>| {
//!             Some(prev.copied().unwrap_or(0) + 1)
//!         },
//!     ),
//!     SliceReducerMap::new().slice(
//!         "b",
//!         |prev: Option<&i64>, _event: &(), partial: &SliceMap<i64>| {
//!             // `a` was recomputed earlier in this same pass.
//!             Some(prev.copied().unwrap_or(0) - partial.get("a").copied().unwrap_or(0))
//!         },
//!     ),
//! ]);
//!
//! let next = transition.reduce(None, &())?;
//! assert_eq!(next.get("a"), Some(&1));
//! assert_eq!(next.get("b"), Some(&-1));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::ComposeError;
use crate::reducer::SliceReducerMap;
use crate::state::SliceMap;

/// Combines reducer maps into a single cross-slice transition.
///
/// Maps are evaluated in the supplied order; within a map, entries run in
/// definition order. No validation happens here — names are taken as
/// given, and the same name may appear in several maps (each occurrence
/// runs, each with the original incoming value as its previous value, and
/// the later occurrence wins in the result).
#[must_use]
pub fn combine_cross_slice_reducers<V, E>(
    maps: impl IntoIterator<Item = SliceReducerMap<V, E>>,
) -> CrossSliceReducer<V, E> {
    CrossSliceReducer {
        maps: maps.into_iter().collect(),
    }
}

/// A combined transition over named slice reducers.
///
/// Created by [`combine_cross_slice_reducers`]. Holds no mutable state of
/// its own, so one instance can serve any number of concurrent
/// invocations.
pub struct CrossSliceReducer<V, E> {
    maps: SmallVec<[SliceReducerMap<V, E>; 2]>,
}

impl<V, E> CrossSliceReducer<V, E>
where
    V: PartialEq,
{
    /// Run one transition.
    ///
    /// `state` is the incoming aggregate state; `None` behaves as an empty
    /// map, in which case every reducer sees `None` as its previous value.
    /// Returns the incoming `Arc` itself when no slice changed (compare
    /// with [`Arc::ptr_eq`]), and a freshly built map otherwise. A changed
    /// result contains exactly the slices the reducer maps define —
    /// incoming slices no map covers are not carried over.
    ///
    /// # Errors
    ///
    /// [`ComposeError::MissingSliceResult`] when a slice reducer returns
    /// `None`. The whole invocation is aborted: no partial result is
    /// produced and the incoming state is untouched.
    pub fn reduce(
        &self,
        state: Option<Arc<SliceMap<V>>>,
        event: &E,
    ) -> Result<Arc<SliceMap<V>>, ComposeError> {
        let incoming = state.unwrap_or_default();
        let mut next = SliceMap::new();
        let mut has_changed = false;

        for map in &self.maps {
            for (name, reducer) in map.entries() {
                let previous = incoming.get(name);
                let Some(value) = reducer(previous, event, &next) else {
                    tracing::debug!(slice = %name, "slice reducer returned no value");
                    return Err(ComposeError::MissingSliceResult {
                        slice: name.clone(),
                    });
                };
                let changed = previous.is_none_or(|previous| *previous != value);
                tracing::trace!(slice = %name, changed, "slice reduced");
                has_changed = has_changed || changed;
                next.insert(name.clone(), value);
            }
        }

        tracing::debug!(slices = next.len(), has_changed, "transition complete");
        if has_changed {
            Ok(Arc::new(next))
        } else {
            Ok(incoming)
        }
    }

    /// Number of reducer maps in this transition.
    #[must_use]
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }
}

impl<V, E> std::fmt::Debug for CrossSliceReducer<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossSliceReducer")
            .field("maps", &self.maps)
            .finish()
    }
}
