use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a report describes a lost or a found object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    Lost,
    Found,
}

impl ReportType {
    /// The complementary type: LOST pairs only with FOUND and vice versa
    pub fn opposite(self) -> Self {
        match self {
            ReportType::Lost => ReportType::Found,
            ReportType::Found => ReportType::Lost,
        }
    }
}

/// Lifecycle status of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Pending,
    Resolved,
    Closed,
}

/// A WGS84 geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A lost-and-found report as read from the store
///
/// The engine treats this as a read-only input. `attributes` is an open
/// per-category key/value bag; the engine looks up only the keys it cares
/// about and never assumes a key is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(rename = "reporterId")]
    pub reporter_id: i64,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub status: ReportStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Report {
    /// Look up a string attribute, defaulting to empty when the key is
    /// missing or holds a non-string value
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Combined title + description used for keyword relevance
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Per-criterion contributions to a match score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub distance: u8,
    pub color: u8,
    pub brand: u8,
    pub text: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.distance + self.color + self.brand + self.text
    }
}

/// A candidate report together with its match score
///
/// Constructed fresh per invocation and returned to the caller; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(rename = "reportId")]
    pub report_id: i64,
    #[serde(rename = "reporterId")]
    pub reporter_id: i64,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    pub title: String,
    pub description: String,
    pub attributes: serde_json::Map<String, Value>,
    pub images: Vec<String>,
    pub location: GeoPoint,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "distanceMeters")]
    pub distance_meters: f64,
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Point values awarded per criterion
///
/// Named configuration replacing the inline constants of earlier revisions,
/// so deployments can tune them without touching scoring logic. The distance
/// tiers use strict `<` comparisons: a candidate exactly at `close_radius_m`
/// falls into the near tier.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    pub distance_close: u8,
    pub distance_near: u8,
    pub color: u8,
    pub brand: u8,
    pub text: u8,
    pub close_radius_m: f64,
    pub near_radius_m: f64,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            distance_close: 40,
            distance_near: 20,
            color: 20,
            brand: 20,
            text: 20,
            close_radius_m: 500.0,
            near_radius_m: 2000.0,
        }
    }
}

impl ScoringPoints {
    /// Maximum total a candidate can reach with these points
    pub fn max_total(&self) -> u8 {
        self.distance_close + self.color + self.brand + self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_type() {
        assert_eq!(ReportType::Lost.opposite(), ReportType::Found);
        assert_eq!(ReportType::Found.opposite(), ReportType::Lost);
    }

    #[test]
    fn test_attribute_lookup_defaults_to_empty() {
        let mut attributes = serde_json::Map::new();
        attributes.insert("color".to_string(), Value::String("Black".to_string()));
        attributes.insert("size".to_string(), Value::Number(42.into()));

        let report = Report {
            id: 1,
            reporter_id: 1,
            report_type: ReportType::Lost,
            category_id: 1,
            title: "Lost wallet".to_string(),
            description: String::new(),
            attributes,
            images: vec![],
            location: None,
            status: ReportStatus::Pending,
            created_at: chrono::Utc::now(),
        };

        assert_eq!(report.attribute("color"), "Black");
        assert_eq!(report.attribute("brand"), "");
        // Non-string values read as empty rather than panicking
        assert_eq!(report.attribute("size"), "");
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoreBreakdown {
            distance: 40,
            color: 20,
            brand: 20,
            text: 20,
        };
        assert_eq!(breakdown.total(), 100);
    }

    #[test]
    fn test_default_points_max_total() {
        assert_eq!(ScoringPoints::default().max_total(), 100);
    }
}
