use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringPoints;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub notify: NotifySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Outer candidate radius. Strictly a retrieval optimization bound; it
    /// must stay large enough that no candidate able to reach the threshold
    /// through non-distance criteria is excluded. The distance sub-score is
    /// already 0 beyond the near radius, so the default 10km is a safe
    /// superset.
    #[serde(default = "default_search_radius_m")]
    pub search_radius_m: f64,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            search_radius_m: default_search_radius_m(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_search_radius_m() -> f64 {
    10_000.0
}
fn default_limit() -> u16 {
    20
}
fn default_max_limit() -> u16 {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
    /// Minimum total score a candidate needs to be surfaced. 60 is the
    /// conservative, test-friendly default; deployments may raise it.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            points: PointsConfig::default(),
            threshold: default_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_distance_close")]
    pub distance_close: u8,
    #[serde(default = "default_distance_near")]
    pub distance_near: u8,
    #[serde(default = "default_color")]
    pub color: u8,
    #[serde(default = "default_brand")]
    pub brand: u8,
    #[serde(default = "default_text")]
    pub text: u8,
    #[serde(default = "default_close_radius_m")]
    pub close_radius_m: f64,
    #[serde(default = "default_near_radius_m")]
    pub near_radius_m: f64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            distance_close: default_distance_close(),
            distance_near: default_distance_near(),
            color: default_color(),
            brand: default_brand(),
            text: default_text(),
            close_radius_m: default_close_radius_m(),
            near_radius_m: default_near_radius_m(),
        }
    }
}

impl From<PointsConfig> for ScoringPoints {
    fn from(config: PointsConfig) -> Self {
        Self {
            distance_close: config.distance_close,
            distance_near: config.distance_near,
            color: config.color,
            brand: config.brand,
            text: config.text,
            close_radius_m: config.close_radius_m,
            near_radius_m: config.near_radius_m,
        }
    }
}

fn default_distance_close() -> u8 {
    40
}
fn default_distance_near() -> u8 {
    20
}
fn default_color() -> u8 {
    20
}
fn default_brand() -> u8 {
    20
}
fn default_text() -> u8 {
    20
}
fn default_close_radius_m() -> f64 {
    500.0
}
fn default_near_radius_m() -> f64 {
    2000.0
}
fn default_threshold() -> u8 {
    60
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NotifySettings {
    /// Platform backend endpoint receiving refresh-triggered match results.
    /// When unset, refresh results are logged and discarded.
    pub webhook_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECLAIM_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECLAIM__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RECLAIM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RECLAIM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides
///
/// DATABASE_URL is honored first for compatibility with hosted Postgres
/// providers, then the prefixed form.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("RECLAIM_DATABASE__URL"))
        .ok();

    let webhook_url = env::var("RECLAIM_NOTIFY__WEBHOOK_URL").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }
    if let Some(url) = webhook_url {
        builder = builder.set_override("notify.webhook_url", url)?;
    }

    builder.build()
}
