use crate::models::{GeoPoint, Report, ReportStatus, ReportType};
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL + PostGIS backed report store
///
/// The matching engine only reads from this store: it fetches source reports
/// by id and retrieves candidate sets through the geography index. Report
/// writes belong to the platform backend.
pub struct ReportStore {
    pool: PgPool,
}

const REPORT_COLUMNS: &str = r#"
    id, reporter_id, type, category_id, title, description, attributes,
    images, status, created_at,
    ST_Y(location::geometry) AS latitude,
    ST_X(location::geometry) AS longitude
"#;

impl ReportStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Fetch a single report by id
    pub async fn get_report(&self, id: i64) -> Result<Report, StoreError> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("report {}", id)))?;

        report_from_row(&row).map_err(Into::into)
    }

    /// Retrieve match candidates for a source report
    ///
    /// Pushes the hard filters into one query against the GIST index:
    /// opposite type, same category, PENDING, not the source itself, located,
    /// and within `radius_m` of the source location. The radius is a bounded
    /// prefilter, not a scoring boundary; ordering is left to the ranking
    /// stage.
    pub async fn candidates_near(
        &self,
        source: &Report,
        origin: &GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<Report>, StoreError> {
        let query = format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE type = $1
              AND category_id = $2
              AND status = 'PENDING'
              AND id <> $3
              AND location IS NOT NULL
              AND ST_DWithin(
                    location,
                    ST_SetSRID(ST_MakePoint($4, $5), 4326)::geography,
                    $6
                  )
            "#
        );

        let rows = sqlx::query(&query)
            .bind(source.report_type.opposite())
            .bind(source.category_id)
            .bind(source.id)
            .bind(origin.longitude)
            .bind(origin.latitude)
            .bind(radius_m)
            .fetch_all(&self.pool)
            .await?;

        let reports: Result<Vec<Report>, sqlx::Error> =
            rows.iter().map(report_from_row).collect();

        reports.map_err(Into::into)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn report_from_row(row: &PgRow) -> Result<Report, sqlx::Error> {
    let latitude: Option<f64> = row.try_get("latitude")?;
    let longitude: Option<f64> = row.try_get("longitude")?;
    let location = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        _ => None,
    };

    let attributes = row
        .try_get::<Value, _>("attributes")?
        .as_object()
        .cloned()
        .unwrap_or_default();

    Ok(Report {
        id: row.try_get("id")?,
        reporter_id: row.try_get("reporter_id")?,
        report_type: row.try_get::<ReportType, _>("type")?,
        category_id: row.try_get("category_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        attributes,
        images: row.try_get("images")?,
        location,
        status: row.try_get::<ReportStatus, _>("status")?,
        created_at: row.try_get("created_at")?,
    })
}
