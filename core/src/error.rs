//! Transition failure types

use thiserror::Error;

/// Failure raised while running a combined cross-slice transition.
///
/// There is exactly one failure mode: a slice reducer produced no value.
/// It is fatal to the invocation — no partial result is returned and the
/// incoming aggregate state is left untouched, so the caller's previous
/// state remains valid after the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A slice reducer returned `None` instead of a next value.
    #[error("slice reducer `{slice}` returned no value")]
    MissingSliceResult {
        /// Name of the offending slice.
        slice: String,
    },
}

impl ComposeError {
    /// Name of the slice whose reducer failed.
    #[must_use]
    pub fn slice(&self) -> &str {
        match self {
            Self::MissingSliceResult { slice } => slice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_offending_slice() {
        let err = ComposeError::MissingSliceResult {
            slice: "clicks".to_string(),
        };
        assert_eq!(err.slice(), "clicks");
        assert_eq!(
            err.to_string(),
            "slice reducer `clicks` returned no value"
        );
    }
}
