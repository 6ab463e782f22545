//! Router for the inbox summary API

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, sse::Event, sse::KeepAlive, sse::Sse},
    routing::post,
};
use chrono::Utc;
use tokio::sync::mpsc;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::public;
use crate::ai::summarize::{summarize_emails, summarize_emails_stream};
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::graph::mail::fetch_emails_since;

type SharedState = Arc<AppState>;

/// Fetch emails received at or after the given time and return one
/// combined summary.
async fn get_important_emails(
    State(state): State<SharedState>,
    Json(payload): Json<public::SummaryRequest>,
) -> Result<Json<public::SummaryResponse>, ApiError> {
    let emails = fetch_emails_since(&state.config, &payload.from_time)
        .await
        .map_err(|e| ApiError::new("getImportantEmails", e))?;
    let summary = summarize_emails(&state.config, &emails)
        .await
        .map_err(|e| ApiError::new("getImportantEmails", e))?;

    Ok(Json(public::SummaryResponse { summary }))
}

/// Same fetch, but forward each chunk summary as a server-sent event
/// the moment it completes, ending with a marker naming the chunk
/// count.
async fn get_important_emails_stream(
    State(state): State<SharedState>,
    Json(payload): Json<public::SummaryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let emails = fetch_emails_since(&state.config, &payload.from_time)
        .await
        .map_err(|e| ApiError::new("getImportantEmails/stream", e))?;

    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let sse_stream = UnboundedReceiverStream::new(rx)
        .map(|fragment| Ok::<Event, Infallible>(Event::default().data(fragment)));

    let config = state.config.clone();
    tokio::spawn(async move {
        match summarize_emails_stream(tx.clone(), &config, &emails).await {
            Ok(total) => {
                let _ = tx.send(format!("[DONE] {} chunks", total));
            }
            // Fragments already forwarded stand. The stream ends here
            // without the done marker, so the caller can tell the
            // digest is incomplete.
            Err(e) => tracing::error!("getImportantEmails/stream failed mid-stream: {}", e),
        }
    });

    let resp = Sse::new(sse_stream).keep_alive(
        KeepAlive::default()
            .text("keep-alive")
            .interval(Duration::from_millis(100)),
    );

    Ok(resp)
}

/// Summarize the last 12 hours of inbox traffic, broadcast style.
async fn summarize_inbox_like_news(
    State(state): State<SharedState>,
) -> Result<Json<public::SummaryResponse>, ApiError> {
    let from_time = (Utc::now() - chrono::Duration::hours(12)).to_rfc3339();
    let emails = fetch_emails_since(&state.config, &from_time)
        .await
        .map_err(|e| ApiError::new("summarizeInboxLikeNews", e))?;
    let summary = summarize_emails(&state.config, &emails)
        .await
        .map_err(|e| ApiError::new("summarizeInboxLikeNews", e))?;

    Ok(Json(public::SummaryResponse {
        summary: format!("🎙️ Here's your inbox broadcast:\n\n{}", summary),
    }))
}

/// Create the inbox summary router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/getImportantEmails", post(get_important_emails))
        .route(
            "/getImportantEmails/stream",
            post(get_important_emails_stream),
        )
        .route("/summarizeInboxLikeNews", post(summarize_inbox_like_news))
}
