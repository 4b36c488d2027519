use crate::core::MatchingEngine;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    RefreshAcceptedResponse, RefreshMatchesRequest, ReportStatus,
};
use crate::services::{MatchNotifier, ReportStore, StoreError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReportStore>,
    pub engine: Arc<MatchingEngine>,
    pub notifier: Option<Arc<MatchNotifier>>,
    pub default_limit: u16,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/refresh", web::post().to(refresh_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Synchronous matching endpoint, called by the platform backend right after
/// it persists a new report
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "reportId": 42,
///   "limit": 20
/// }
/// ```
///
/// An unknown report id is the caller's error (404). A failing match
/// computation is not: the response is then a 200 with an empty `matches`
/// list, because suggestions must never block the report-creation path.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req.limit.clamp(1, state.max_limit) as usize;

    tracing::info!("Finding matches for report {}, limit {}", req.report_id, limit);

    let report = match state.store.get_report(req.report_id).await {
        Ok(report) => report,
        Err(StoreError::NotFound(_)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Report not found".to_string(),
                message: format!("No report with id {}", req.report_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch report {}: {}", req.report_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch report".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let matches = state.engine.find_matches(&report, limit).await;

    let response = FindMatchesResponse {
        report_id: report.id,
        total_matches: matches.len(),
        matches,
    };

    tracing::info!(
        "Returning {} matches for report {}",
        response.total_matches,
        response.report_id
    );

    HttpResponse::Ok().json(response)
}

/// Fire-and-forget recomputation endpoint, called by the platform backend
/// after a qualifying report update (attribute change, location change, or a
/// status transition back into PENDING)
///
/// POST /api/v1/matches/refresh
///
/// Responds 202 immediately; the computation runs on a detached task and the
/// result goes to the notification webhook. A source report that is no
/// longer PENDING suppresses the computation.
async fn refresh_matches(
    state: web::Data<AppState>,
    req: web::Json<RefreshMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let report = match state.store.get_report(req.report_id).await {
        Ok(report) => report,
        Err(StoreError::NotFound(_)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Report not found".to_string(),
                message: format!("No report with id {}", req.report_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch report {}: {}", req.report_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch report".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    if report.status != ReportStatus::Pending {
        tracing::debug!(
            "Suppressing match refresh for report {} with status {:?}",
            report.id,
            report.status
        );
        return HttpResponse::Accepted().json(RefreshAcceptedResponse {
            report_id: report.id,
            accepted: false,
        });
    }

    let report_id = report.id;
    let engine = state.engine.clone();
    let notifier = state.notifier.clone();
    let limit = state.default_limit as usize;

    // Detached task with its own error handling; nothing here can propagate
    // to or delay the update response that triggered it
    tokio::spawn(async move {
        let matches = engine.find_matches(&report, limit).await;

        if matches.is_empty() {
            tracing::debug!("Refresh for report {} produced no matches", report.id);
            return;
        }

        match notifier {
            Some(notifier) => {
                if let Err(e) = notifier.publish(&report, &matches).await {
                    tracing::warn!(
                        "Failed to deliver {} matches for report {}: {}",
                        matches.len(),
                        report.id,
                        e
                    );
                }
            }
            None => {
                tracing::info!(
                    "No webhook configured; discarding {} matches for report {}",
                    matches.len(),
                    report.id
                );
            }
        }
    });

    HttpResponse::Accepted().json(RefreshAcceptedResponse {
        report_id,
        accepted: true,
    })
}
