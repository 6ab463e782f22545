//! API routes module

pub mod emails;
mod meta;

use std::sync::Arc;

use axum::Router;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Create the combined API router. The summary routes are the public
/// contract of the service and mount at the root.
pub fn router() -> Router<SharedState> {
    Router::new()
        // Inbox summary routes
        .merge(emails::router())
        // Discovery metadata
        .merge(meta::router())
}
