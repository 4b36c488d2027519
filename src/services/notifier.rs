use crate::models::{Report, ScoredCandidate};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when delivering a match notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook returned error: {0}")]
    Api(String),
}

/// Payload posted to the platform backend's notification webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchNotification {
    #[serde(rename = "notificationId")]
    pub notification_id: String,
    #[serde(rename = "reportId")]
    pub report_id: i64,
    #[serde(rename = "reporterId")]
    pub reporter_id: i64,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    pub matches: Vec<ScoredCandidate>,
}

/// Webhook client for refresh-triggered match results
///
/// Delivery is best-effort: results of fire-and-forget recomputations are
/// handed to the platform backend, which decides whether to notify the
/// reporter. Failures are the caller's to log and swallow.
pub struct MatchNotifier {
    webhook_url: String,
    client: Client,
}

impl MatchNotifier {
    pub fn new(webhook_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            webhook_url,
            client,
        }
    }

    /// Deliver match results for a report
    pub async fn publish(
        &self,
        report: &Report,
        matches: &[ScoredCandidate],
    ) -> Result<(), NotifyError> {
        let payload = MatchNotification {
            notification_id: uuid::Uuid::new_v4().to_string(),
            report_id: report.id,
            reporter_id: report.reporter_id,
            total_matches: matches.len(),
            matches: matches.to_vec(),
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Api(format!(
                "webhook responded with {}",
                response.status()
            )));
        }

        tracing::debug!(
            "Delivered {} matches for report {} to webhook",
            payload.total_matches,
            payload.report_id
        );

        Ok(())
    }
}
