//! Mapping of registry errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, From};
use gridmatch_core::{MatchError, MatchErrorKind};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error category, e.g. `ConflictError`.
    pub error: String,
    /// Human-readable reason.
    pub message: String,
}

/// Handler error wrapping a [`MatchError`].
#[derive(Debug, Display, From)]
pub struct ApiError(MatchError);

impl ApiError {
    /// HTTP status for the wrapped error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            MatchErrorKind::Validation => StatusCode::BAD_REQUEST,
            MatchErrorKind::NotFound => StatusCode::NOT_FOUND,
            MatchErrorKind::Conflict => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(
            status = %status,
            kind = %self.0.kind,
            origin = %format!("{}:{}", self.0.file, self.0.line),
            message = %self.0.message,
            "Request rejected"
        );
        let body = ErrorBody {
            error: self.0.kind.to_string(),
            message: self.0.message,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (MatchError::validation("bad"), StatusCode::BAD_REQUEST),
            (MatchError::not_found("gone"), StatusCode::NOT_FOUND),
            (MatchError::conflict("busy"), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }
}
