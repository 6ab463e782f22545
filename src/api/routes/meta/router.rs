//! Router for service discovery metadata

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Minimal OpenAPI document naming the service and its operations.
async fn openapi(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Inbox Assistant API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "servers": [{"url": state.config.service_url}],
        "paths": {
            "/getImportantEmails": {
                "post": {"summary": "Summarize emails received since a given time"}
            },
            "/getImportantEmails/stream": {
                "post": {"summary": "Stream chunk summaries as server-sent events"}
            },
            "/summarizeInboxLikeNews": {
                "post": {"summary": "Summarize the last 12 hours, broadcast style"}
            }
        }
    }))
}

/// Create the metadata router
pub fn router() -> Router<SharedState> {
    Router::new().route("/openapi.json", get(openapi))
}
