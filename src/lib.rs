//! Reclaim Algo - matching service for the Reclaim lost & found platform
//!
//! This library provides the matching engine that pairs LOST reports with
//! FOUND reports. It implements bounded-radius candidate retrieval followed
//! by multi-criteria weighted scoring, ranking, and thresholding.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance_meters, MatchingEngine, Matcher};
pub use crate::models::{
    FindMatchesRequest, FindMatchesResponse, GeoPoint, Report, ReportStatus, ReportType,
    ScoreBreakdown, ScoredCandidate, ScoringPoints,
};
