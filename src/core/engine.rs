use crate::core::matcher::Matcher;
use crate::models::{Report, ScoredCandidate};
use crate::services::{ReportStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors internal to a match computation
///
/// Neither variant ever reaches an HTTP caller; `find_matches` degrades both
/// to an empty result.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("report store error: {0}")]
    Store(#[from] StoreError),
}

/// Entry point of the matching pipeline
///
/// Stateless: every invocation is an independent read-only computation over
/// the store, so concurrent calls need no coordination and a call repeated
/// against an unchanged store returns the same result.
pub struct MatchingEngine {
    store: Arc<ReportStore>,
    matcher: Matcher,
    search_radius_m: f64,
}

impl MatchingEngine {
    pub fn new(store: Arc<ReportStore>, matcher: Matcher, search_radius_m: f64) -> Self {
        Self {
            store,
            matcher,
            search_radius_m,
        }
    }

    /// Find plausible counterpart reports for a report, fail-soft
    ///
    /// Match suggestions are advisory; this must never be the reason a
    /// report write fails. Retrieval and validation errors are logged with
    /// the report id and degrade to "no suggestions".
    pub async fn find_matches(&self, report: &Report, limit: usize) -> Vec<ScoredCandidate> {
        match self.try_find_matches(report, limit).await {
            Ok(matches) => matches,
            Err(MatchError::InvalidInput(reason)) => {
                tracing::warn!(
                    "Skipping match computation for report {}: {}",
                    report.id,
                    reason
                );
                vec![]
            }
            Err(e) => {
                tracing::error!("Match computation failed for report {}: {}", report.id, e);
                vec![]
            }
        }
    }

    /// Fallible variant used by `find_matches` and by tests
    pub async fn try_find_matches(
        &self,
        report: &Report,
        limit: usize,
    ) -> Result<Vec<ScoredCandidate>, MatchError> {
        let origin = report
            .location
            .ok_or_else(|| MatchError::InvalidInput("report has no location".to_string()))?;

        let candidates = self
            .store
            .candidates_near(report, &origin, self.search_radius_m)
            .await?;

        tracing::debug!(
            "Retrieved {} candidates for report {} within {}m",
            candidates.len(),
            report.id,
            self.search_radius_m
        );

        let result = self.matcher.find_matches(report, candidates, limit);

        tracing::info!(
            "Report {}: {} of {} candidates scored at or above threshold {}",
            report.id,
            result.matches.len(),
            result.total_candidates,
            self.matcher.threshold()
        );

        Ok(result.matches)
    }
}
