use crate::core::{filters::is_candidate, scoring::score_pair};
use crate::models::{Report, ScoredCandidate, ScoringPoints};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranking stage of the matching pipeline
///
/// # Pipeline Stages
/// 1. Hard candidate gate (opposite type, same category, PENDING, not self,
///    within the outer radius)
/// 2. Scoring (distance tiers + attribute equality + keyword relevance)
/// 3. Threshold cut
/// 4. Ordering and result cap
#[derive(Debug, Clone)]
pub struct Matcher {
    points: ScoringPoints,
    threshold: u8,
    search_radius_m: f64,
}

impl Matcher {
    pub fn new(points: ScoringPoints, threshold: u8, search_radius_m: f64) -> Self {
        // The outer radius is an optimization bound, not a scoring input; it
        // must stay a superset of the distance-scoring range or high-scoring
        // candidates get silently dropped.
        debug_assert!(
            search_radius_m >= points.near_radius_m,
            "search radius smaller than the scored distance range"
        );

        Self {
            points,
            threshold,
            search_radius_m,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringPoints::default(), 60, 10_000.0)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Score and rank candidates for a source report
    ///
    /// Candidates usually arrive pre-filtered by the store query; the hard
    /// gate is re-applied here so the outcome does not depend on how strict
    /// that query was.
    ///
    /// # Arguments
    /// * `source` - The report to find counterparts for
    /// * `candidates` - Potential matches from the store
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches(
        &self,
        source: &Report,
        candidates: Vec<Report>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| is_candidate(source, candidate, self.search_radius_m))
            .filter_map(|candidate| {
                let (breakdown, distance_m) = score_pair(source, &candidate, &self.points)?;
                let total_score = breakdown.total();

                // Threshold is inclusive: a candidate scoring exactly the
                // threshold is surfaced
                if total_score < self.threshold {
                    return None;
                }

                let location = candidate.location?;

                Some(ScoredCandidate {
                    report_id: candidate.id,
                    reporter_id: candidate.reporter_id,
                    report_type: candidate.report_type,
                    category_id: candidate.category_id,
                    title: candidate.title,
                    description: candidate.description,
                    attributes: candidate.attributes,
                    images: candidate.images,
                    location,
                    created_at: candidate.created_at,
                    distance_meters: distance_m,
                    total_score,
                    breakdown,
                })
            })
            .collect();

        // Sort by score (descending); ties break by distance (ascending)
        matches.sort_by(|a, b| {
            b.total_score.cmp(&a.total_score).then_with(|| {
                a.distance_meters
                    .partial_cmp(&b.distance_meters)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
