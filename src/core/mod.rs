// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use distance::{distance_meters, within_radius};
pub use engine::{MatchError, MatchingEngine};
pub use filters::is_candidate;
pub use matcher::{MatchResult, Matcher};
pub use scoring::{brand_points, color_points, distance_points, score_pair, text_points};
pub use text::{keywords, keywords_overlap};
