//! Slice reducers and named-reducer maps
//!
//! A slice reducer owns one named portion of the aggregate state. It is
//! called with its own previous value, the event being processed, and the
//! partially built next aggregate state, and must produce the slice's next
//! value. Returning `None` is a contract violation that aborts the whole
//! transition (see [`crate::error::ComposeError`]).

use std::fmt;

use crate::state::SliceMap;

/// A boxed slice reducer.
///
/// Arguments, in order:
/// 1. the slice's previous value, drawn from the *original* incoming
///    aggregate state (`None` when the slice is absent there),
/// 2. the event, forwarded unmodified,
/// 3. the partial next state built so far in the current pass.
///
/// The return value is the slice's next value. `None` means the reducer
/// failed to produce a value; there is no legitimate "absent" result.
pub type SliceReducer<V, E> =
    Box<dyn Fn(Option<&V>, &E, &SliceMap<V>) -> Option<V> + Send + Sync>;

/// One ordered mapping of slice name to slice reducer.
///
/// Entries are evaluated in the order they were added. Several maps can be
/// combined into one transition with
/// [`combine_cross_slice_reducers`](crate::composition::combine_cross_slice_reducers);
/// the same name may appear in more than one map.
///
/// # Example
///
/// ```
/// use crosslice_core::{SliceMap, SliceReducerMap};
///
/// let map: SliceReducerMap<i64, ()> = SliceReducerMap::new()
///     .slice("clicks", |prev: Option<&i64>, _event: &(), _partial: &SliceMap<i64>| {
///         Some(prev.copied().unwrap_or(0) + 1)
///     });
/// assert_eq!(map.slice_names().collect::<Vec<_>>(), vec!["clicks"]);
/// ```
pub struct SliceReducerMap<V, E> {
    entries: Vec<(String, SliceReducer<V, E>)>,
}

impl<V, E> SliceReducerMap<V, E> {
    /// Create an empty reducer map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a named slice reducer, keeping definition order.
    #[must_use]
    pub fn slice<N, F>(mut self, name: N, reducer: F) -> Self
    where
        N: Into<String>,
        F: Fn(Option<&V>, &E, &SliceMap<V>) -> Option<V> + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Box::new(reducer)));
        self
    }

    /// Slice names in definition order.
    pub fn slice_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of entries in this map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, SliceReducer<V, E>)] {
        &self.entries
    }
}

impl<V, E> Default for SliceReducerMap<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

// Reducers are opaque closures; show the names only.
impl<V, E> fmt::Debug for SliceReducerMap<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceReducerMap")
            .field("slices", &self.slice_names().collect::<Vec<_>>())
            .finish()
    }
}
