//! Aggregate state for cross-slice reduction
//!
//! The aggregate state is a flat mapping from slice name to slice value.
//! Values are opaque to the composition machinery: the composer only ever
//! reads them, compares them for equality, and moves freshly produced
//! values into a new map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The aggregate state: a mapping from slice name to slice value.
///
/// A `SliceMap` is owned by the caller. The composer never mutates an
/// incoming map; it either hands the same map back (when no slice changed)
/// or produces a brand-new one.
///
/// The same type doubles as the *partial* next state passed to slice
/// reducers mid-pass: there it contains only the slices already computed
/// earlier in the current pass, so [`SliceMap::get`] returning `None` means
/// "not reduced yet (or not reduced at all)" rather than "empty value".
///
/// # Example
///
/// ```
/// use crosslice_core::SliceMap;
///
/// let state: SliceMap<i64> = [("clicks".to_string(), 3)].into_iter().collect();
/// assert_eq!(state.get("clicks"), Some(&3));
/// assert_eq!(state.get("absent"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceMap<V> {
    slices: HashMap<String, V>,
}

impl<V> SliceMap<V> {
    /// Create an empty aggregate state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slices: HashMap::new(),
        }
    }

    /// Look up a slice value by name.
    ///
    /// Returns `None` when the slice is absent. On a partial next state
    /// this is the normal case for slices not yet processed in the
    /// current pass; downstream reducers must handle it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.slices.get(name)
    }

    /// Whether a slice with the given name is present.
    #[must_use]
    pub fn contains_slice(&self, name: &str) -> bool {
        self.slices.contains_key(name)
    }

    /// Insert or replace a slice value, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.slices.insert(name.into(), value)
    }

    /// Number of slices present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slices are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.slices.iter().map(|(name, value)| (name.as_str(), value))
    }
}

// Manual impl: the derived one would add a spurious `V: Default` bound.
impl<V> Default for SliceMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for SliceMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            slices: iter.into_iter().collect(),
        }
    }
}

impl<V> Extend<(String, V)> for SliceMap<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        self.slices.extend(iter);
    }
}

impl<V> From<HashMap<String, V>> for SliceMap<V> {
    fn from(slices: HashMap<String, V>) -> Self {
        Self { slices }
    }
}
