use crate::core::{distance::distance_meters, text::keywords_overlap};
use crate::models::{Report, ScoreBreakdown, ScoringPoints};

/// Distance sub-score, tiered rather than continuous
///
/// Tiers keep results predictable and explainable: under the close radius
/// full points, under the near radius half, beyond that nothing. Both
/// boundaries use strict `<`, so exactly 500.0 m scores the near tier and
/// exactly 2000.0 m scores zero.
#[inline]
pub fn distance_points(distance_m: f64, points: &ScoringPoints) -> u8 {
    if distance_m < points.close_radius_m {
        points.distance_close
    } else if distance_m < points.near_radius_m {
        points.distance_near
    } else {
        0
    }
}

/// Color sub-score: exact, case-sensitive equality of a non-empty attribute
#[inline]
pub fn color_points(source: &Report, candidate: &Report, points: &ScoringPoints) -> u8 {
    let a = source.attribute("color");
    let b = candidate.attribute("color");

    if !a.is_empty() && a == b {
        points.color
    } else {
        0
    }
}

/// Brand sub-score: case-insensitive equality of a non-empty attribute
#[inline]
pub fn brand_points(source: &Report, candidate: &Report, points: &ScoringPoints) -> u8 {
    let a = source.attribute("brand");
    let b = candidate.attribute("brand");

    if !a.is_empty() && !b.is_empty() && a.to_lowercase() == b.to_lowercase() {
        points.brand
    } else {
        0
    }
}

/// Text sub-score: boolean keyword hit between the two title+description
/// blobs, not a graded relevance score
#[inline]
pub fn text_points(source: &Report, candidate: &Report, points: &ScoringPoints) -> u8 {
    if keywords_overlap(&source.search_text(), &candidate.search_text()) {
        points.text
    } else {
        0
    }
}

/// Score a source/candidate pair
///
/// Pure function over two reports; candidates are fetched elsewhere so the
/// scoring math stays unit-testable without a storage engine. Returns the
/// breakdown plus the computed distance in meters, or `None` when either
/// side lacks a location (such pairs are excluded upstream and must not be
/// scored with a zero distance).
pub fn score_pair(
    source: &Report,
    candidate: &Report,
    points: &ScoringPoints,
) -> Option<(ScoreBreakdown, f64)> {
    let origin = source.location.as_ref()?;
    let position = candidate.location.as_ref()?;

    let distance_m = distance_meters(origin, position);

    let breakdown = ScoreBreakdown {
        distance: distance_points(distance_m, points),
        color: color_points(source, candidate, points),
        brand: brand_points(source, candidate, points),
        text: text_points(source, candidate, points),
    };

    Some((breakdown, distance_m))
}
