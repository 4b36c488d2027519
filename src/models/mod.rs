// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    GeoPoint, Report, ReportStatus, ReportType, ScoreBreakdown, ScoredCandidate, ScoringPoints,
};
pub use requests::{FindMatchesRequest, RefreshMatchesRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, RefreshAcceptedResponse};
