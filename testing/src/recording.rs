//! Recording slice reducers
//!
//! Mock slice reducers that capture the exact arguments of every call,
//! for asserting what a combined transition actually passed to each
//! slice: its own previous value, the event, and a snapshot of the
//! partial next state at the moment of the call.

use std::sync::{Arc, Mutex};

use crosslice_core::{SliceMap, SliceReducer};

/// One recorded slice reducer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall<V, E> {
    /// The slice's previous value, as passed (owned copy).
    pub previous: Option<V>,
    /// The event, as passed.
    pub event: E,
    /// Snapshot of the partial next state at call time.
    pub partial: SliceMap<V>,
}

/// A slice reducer that records every call before delegating to an
/// inner behavior.
///
/// # Example
///
/// ```
/// use crosslice_core::{SliceReducerMap, combine_cross_slice_reducers};
/// use crosslice_testing::RecordingReducer;
///
/// # fn main() -> Result<(), crosslice_core::ComposeError> {
/// let recorder: RecordingReducer<i64, ()> = RecordingReducer::identity_or(0);
/// let transition = combine_cross_slice_reducers(vec![
///     SliceReducerMap::new().slice("clicks", recorder.reducer()),
/// ]);
///
/// transition.reduce(None, &())?;
///
/// assert_eq!(recorder.call_count(), 1);
/// assert_eq!(recorder.calls()[0].previous, None);
/// # Ok(())
/// # }
/// ```
pub struct RecordingReducer<V, E> {
    calls: Arc<Mutex<Vec<RecordedCall<V, E>>>>,
    behavior: Arc<dyn Fn(Option<&V>, &E, &SliceMap<V>) -> Option<V> + Send + Sync>,
}

impl<V, E> RecordingReducer<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Record calls, delegating to an arbitrary inner behavior.
    #[must_use]
    pub fn wrapping<F>(behavior: F) -> Self
    where
        F: Fn(Option<&V>, &E, &SliceMap<V>) -> Option<V> + Send + Sync + 'static,
    {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            behavior: Arc::new(behavior),
        }
    }

    /// Record calls, returning the previous value unchanged, or the given
    /// default when the slice is absent.
    #[must_use]
    pub fn identity_or(default: V) -> Self {
        Self::wrapping(move |previous, _event, _partial| {
            Some(previous.cloned().unwrap_or_else(|| default.clone()))
        })
    }

    /// Record calls, always returning the same value.
    #[must_use]
    pub fn returning(value: V) -> Self {
        Self::wrapping(move |_previous, _event, _partial| Some(value.clone()))
    }

    /// Record calls, always returning no value (contract violation).
    #[must_use]
    pub fn missing() -> Self {
        Self::wrapping(|_previous, _event, _partial| None)
    }

    /// Build the actual slice reducer to hand to a
    /// [`crosslice_core::SliceReducerMap`].
    ///
    /// The returned reducer shares this recorder's call log, so several
    /// reducers (or passes) can be observed through one recorder.
    ///
    /// # Panics
    ///
    /// The reducer panics if the call log mutex was poisoned by an
    /// earlier test failure.
    #[must_use]
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn reducer(&self) -> SliceReducer<V, E> {
        let calls = Arc::clone(&self.calls);
        let behavior = Arc::clone(&self.behavior);
        Box::new(move |previous, event, partial| {
            calls.lock().expect("call log lock").push(RecordedCall {
                previous: previous.cloned(),
                event: event.clone(),
                partial: partial.clone(),
            });
            behavior(previous, event, partial)
        })
    }

    /// All recorded calls, in invocation order.
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex was poisoned by an earlier test
    /// failure.
    #[must_use]
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn calls(&self) -> Vec<RecordedCall<V, E>> {
        self.calls.lock().expect("call log lock").clone()
    }

    /// Number of recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex was poisoned by an earlier test
    /// failure.
    #[must_use]
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log lock").len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crosslice_core::{SliceReducerMap, combine_cross_slice_reducers};

    #[test]
    fn records_previous_event_and_partial() {
        let first: RecordingReducer<i64, &str> = RecordingReducer::returning(7);
        let second: RecordingReducer<i64, &str> = RecordingReducer::identity_or(0);
        let transition = combine_cross_slice_reducers(vec![
            SliceReducerMap::new()
                .slice("a", first.reducer())
                .slice("b", second.reducer()),
        ]);

        let incoming = Arc::new(
            [("a".to_string(), 1), ("b".to_string(), 2)]
                .into_iter()
                .collect::<SliceMap<i64>>(),
        );
        transition.reduce(Some(incoming), &"tick").unwrap();

        let calls = second.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].previous, Some(2));
        assert_eq!(calls[0].event, "tick");
        // `a` was already recomputed when `b` ran.
        assert_eq!(calls[0].partial.get("a"), Some(&7));
        assert_eq!(calls[0].partial.get("b"), None);
    }

    #[test]
    fn missing_recorder_triggers_the_contract_violation() {
        let broken: RecordingReducer<i64, ()> = RecordingReducer::missing();
        let transition = combine_cross_slice_reducers(vec![
            SliceReducerMap::new().slice("broken", broken.reducer()),
        ]);

        let err = transition.reduce(None, &()).unwrap_err();
        assert_eq!(err.slice(), "broken");
        assert_eq!(broken.call_count(), 1);
    }

    #[test]
    fn one_recorder_observes_multiple_passes() {
        let recorder: RecordingReducer<i64, ()> = RecordingReducer::identity_or(0);
        let transition = combine_cross_slice_reducers(vec![
            SliceReducerMap::new().slice("clicks", recorder.reducer()),
        ]);

        let first = transition.reduce(None, &()).unwrap();
        transition.reduce(Some(first), &()).unwrap();

        assert_eq!(recorder.call_count(), 2);
        assert_eq!(recorder.calls()[1].previous, Some(0));
    }
}
