//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;

use crate::core::Error;

// Errors

/// An error leaving the HTTP facade, tagged with the operation that
/// produced it.
pub struct ApiError {
    operation: &'static str,
    source: Error,
}

impl ApiError {
    pub fn new(operation: &'static str, source: Error) -> Self {
        Self { operation, source }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error, including for client mistakes. This is
        // the one log line for a failed request.
        tracing::error!("{} failed: {}", self.operation, self.source);

        let status = match self.source {
            Error::InvalidTimeFormat(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.source.to_string() }))).into_response()
    }
}

// Re-export public types from each route

pub mod emails {
    pub use crate::api::routes::emails::public::*;
}
