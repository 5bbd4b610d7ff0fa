//! Unified error handling for the HTTP adapter.
//!
//! Provides the `AppError` type that maps domain failures to HTTP status
//! codes. All route handlers return `Result<T, AppError>`. This is the only
//! layer that classifies errors into status codes; the service layer deals
//! in typed domain errors exclusively.
//!
//! Error responses carry empty bodies. Diagnostics (including the offending
//! user id on not-found) go to the logs, never to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::FriendshipError;

/// Application-level error type for the FriendGraph server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Friendship operation failed.
    #[error("friendship error: {0}")]
    Friendship(#[from] FriendshipError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request, rejected before any service call.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// The status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Friendship(err) => match err {
                FriendshipError::SelfFriendship(_) => StatusCode::UNPROCESSABLE_ENTITY,
                FriendshipError::UserNotFound(_) => StatusCode::NOT_FOUND,
                FriendshipError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        status.into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
