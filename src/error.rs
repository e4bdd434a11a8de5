//! Error types for shimmy-relay.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::proxy::types::ErrorBody;

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shimmy-relay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any failed outbound call: connect errors, timeouts and non-2xx
    /// statuses all land here.
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    /// Inbound JSON body that could not be parsed.
    #[error("{0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // Parse failures keep axum's own status and message.
            Error::Body(rejection) => rejection.into_response(),
            // Upstream status is not passed through; every failure is a 500.
            Error::Upstream(e) => {
                let body = ErrorBody {
                    error: e.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
