use crate::core::distance::within_radius;
use crate::models::{Report, ReportStatus};

/// Hard candidate gate
///
/// Mirrors the retrieval predicate so the matcher gives the same answer
/// regardless of how loosely the store pre-filtered. Every term is a binary
/// gate, not a score input: a mismatch excludes the pair outright.
#[inline]
pub fn is_candidate(source: &Report, candidate: &Report, radius_m: f64) -> bool {
    // Self-exclusion
    if candidate.id == source.id {
        return false;
    }

    // Opposite type only; a report can never match another of the same type
    if candidate.report_type != source.report_type.opposite() {
        return false;
    }

    // Same category; a brown wallet should never match a brown dog
    if candidate.category_id != source.category_id {
        return false;
    }

    // Only open reports are eligible
    if candidate.status != ReportStatus::Pending {
        return false;
    }

    // Both sides need a location; a missing location is excluded here,
    // never scored as a zero distance
    let (origin, position) = match (&source.location, &candidate.location) {
        (Some(origin), Some(position)) => (origin, position),
        _ => return false,
    };

    within_radius(origin, position, radius_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, ReportType};

    fn report(id: i64, report_type: ReportType, category_id: i32, lat: f64) -> Report {
        Report {
            id,
            reporter_id: id,
            report_type,
            category_id,
            title: format!("Report {}", id),
            description: String::new(),
            attributes: serde_json::Map::new(),
            images: vec![],
            location: Some(GeoPoint {
                latitude: lat,
                longitude: -74.0060,
            }),
            status: ReportStatus::Pending,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_accepts_opposite_type_same_category() {
        let source = report(1, ReportType::Found, 3, 40.7128);
        let candidate = report(2, ReportType::Lost, 3, 40.7150);

        assert!(is_candidate(&source, &candidate, 10_000.0));
    }

    #[test]
    fn test_rejects_same_type() {
        let source = report(1, ReportType::Lost, 3, 40.7128);
        let candidate = report(2, ReportType::Lost, 3, 40.7150);

        assert!(!is_candidate(&source, &candidate, 10_000.0));
    }

    #[test]
    fn test_rejects_category_mismatch() {
        let source = report(1, ReportType::Found, 3, 40.7128);
        let candidate = report(2, ReportType::Lost, 4, 40.7150);

        assert!(!is_candidate(&source, &candidate, 10_000.0));
    }

    #[test]
    fn test_rejects_closed_reports() {
        let source = report(1, ReportType::Found, 3, 40.7128);

        let mut resolved = report(2, ReportType::Lost, 3, 40.7150);
        resolved.status = ReportStatus::Resolved;
        assert!(!is_candidate(&source, &resolved, 10_000.0));

        let mut closed = report(3, ReportType::Lost, 3, 40.7150);
        closed.status = ReportStatus::Closed;
        assert!(!is_candidate(&source, &closed, 10_000.0));
    }

    #[test]
    fn test_rejects_self() {
        let source = report(1, ReportType::Found, 3, 40.7128);
        let mut same_id = report(1, ReportType::Lost, 3, 40.7150);
        same_id.id = source.id;

        assert!(!is_candidate(&source, &same_id, 10_000.0));
    }

    #[test]
    fn test_rejects_missing_location() {
        let source = report(1, ReportType::Found, 3, 40.7128);
        let mut no_location = report(2, ReportType::Lost, 3, 40.7150);
        no_location.location = None;

        assert!(!is_candidate(&source, &no_location, 10_000.0));
    }

    #[test]
    fn test_rejects_beyond_radius() {
        let source = report(1, ReportType::Found, 3, 40.7128);
        // ~12km north
        let far = report(2, ReportType::Lost, 3, 40.7128 + 12_000.0 / 111_195.0);

        assert!(!is_candidate(&source, &far, 10_000.0));
    }
}
