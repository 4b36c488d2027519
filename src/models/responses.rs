use crate::models::domain::ScoredCandidate;
use serde::{Deserialize, Serialize};

/// Response for the synchronous find endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Response for the fire-and-forget refresh endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshAcceptedResponse {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    pub accepted: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
