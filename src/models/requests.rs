use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find matches for a stored report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "report_id", rename = "reportId")]
    pub report_id: i64,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}

/// Request to recompute matches after a qualifying report update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshMatchesRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "report_id", rename = "reportId")]
    pub report_id: i64,
}
