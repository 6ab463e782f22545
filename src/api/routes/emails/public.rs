//! Public types for the inbox summary API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SummaryRequest {
    pub from_time: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
