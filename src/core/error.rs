//! Error types shared by every component

use thiserror::Error;

/// Failure classes for the fetch-and-summarize pipeline. Nothing is
/// retried internally; every variant unwinds to the HTTP facade where it
/// is logged and translated into a status code.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid from_time: {0}")]
    InvalidTimeFormat(String),

    #[error("{0} must be set in the environment")]
    AuthConfig(&'static str),

    #[error("Failed to acquire token: {0}")]
    AuthFailure(String),

    #[error("Mail API request failed: {status} ({body})")]
    Upstream { status: u16, body: String },

    #[error("OpenAI request failed: {0}")]
    Summarization(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
