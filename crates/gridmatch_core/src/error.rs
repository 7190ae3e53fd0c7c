//! Error types for registry operations.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Category of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MatchErrorKind {
    /// Malformed input, such as out-of-range coordinates.
    #[display("ValidationError")]
    Validation,
    /// A referenced game or participant does not exist.
    #[display("NotFoundError")]
    NotFound,
    /// The operation violates the current game state.
    #[display("ConflictError")]
    Conflict,
}

/// Error returned by registry and player directory operations.
///
/// Carries the [`MatchErrorKind`] the caller dispatches on, a human-readable
/// message, and the location the error was raised from.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", kind, message, file, line)]
pub struct MatchError {
    /// Error category.
    pub kind: MatchErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MatchError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: MatchErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Malformed input.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(MatchErrorKind::Validation, message)
    }

    /// Missing game or participant.
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(MatchErrorKind::NotFound, message)
    }

    /// Rule violation against the current game state.
    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(MatchErrorKind::Conflict, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(MatchError::validation("x").kind, MatchErrorKind::Validation);
        assert_eq!(MatchError::not_found("x").kind, MatchErrorKind::NotFound);
        assert_eq!(MatchError::conflict("x").kind, MatchErrorKind::Conflict);
    }

    #[test]
    fn test_location_points_at_caller() {
        let err = MatchError::conflict("Game is full");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("ConflictError: Game is full at"));
    }
}
