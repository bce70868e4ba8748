//! Batch passport service integration.
//!
//! Resolves a batch's temperature envelope with `GET {url}/batches/{batch_id}`.

use std::time::Duration;

use async_trait::async_trait;
use domain::models::{BatchLimits, LimitsResolution};
use domain::services::LimitsResolver;
use metrics::counter;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PassportConfig;

/// Errors that can occur while fetching batch limits.
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("passport service timed out after {0}ms")]
    Timeout(u64),

    #[error("passport service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("passport service returned {0}")]
    Status(StatusCode),

    #[error("invalid response from passport service: {0}")]
    InvalidResponse(String),

    #[error("batch {0} has no temperature limits")]
    MissingLimits(Uuid),
}

/// Subset of the passport batch document carrying the temperature envelope.
#[derive(Debug, Deserialize)]
struct PassportBatchResponse {
    #[serde(default)]
    min_temp: Option<f64>,
    #[serde(default)]
    max_temp: Option<f64>,
}

/// HTTP client for the batch passport service.
#[derive(Debug, Clone)]
pub struct PassportClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl PassportClient {
    /// Create a new passport client. Every lookup is bounded by `timeout_ms`.
    pub fn new(config: &PassportConfig) -> Result<Self, PassportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn batch_url(&self, batch_id: Uuid) -> String {
        format!("{}/batches/{}", self.base_url, batch_id)
    }

    /// Fetch the limits of one batch.
    pub async fn fetch_limits(&self, batch_id: Uuid) -> Result<BatchLimits, PassportError> {
        let url = self.batch_url(batch_id);
        debug!(url = %url, "Fetching batch limits");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                PassportError::Timeout(self.timeout_ms)
            } else {
                PassportError::Http(e)
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PassportError::Status(status));
        }

        let body: PassportBatchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                PassportError::Timeout(self.timeout_ms)
            } else {
                PassportError::InvalidResponse(e.to_string())
            }
        })?;

        match (body.min_temp, body.max_temp) {
            (Some(min_temp), Some(max_temp)) => Ok(BatchLimits { min_temp, max_temp }),
            _ => Err(PassportError::MissingLimits(batch_id)),
        }
    }
}

#[async_trait]
impl LimitsResolver for PassportClient {
    async fn resolve(&self, batch_id: Uuid) -> LimitsResolution {
        match self.fetch_limits(batch_id).await {
            Ok(limits) => {
                counter!("passport_limits_lookups_total", "outcome" => "resolved").increment(1);
                LimitsResolution::Resolved(limits)
            }
            Err(e) => {
                counter!("passport_limits_lookups_total", "outcome" => "unavailable").increment(1);
                warn!(%batch_id, error = %e, "Failed to fetch batch limits");
                LimitsResolution::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> PassportConfig {
        PassportConfig {
            url: url.to_string(),
            timeout_ms: 3000,
        }
    }

    #[test]
    fn test_batch_url() {
        let client = PassportClient::new(&config("http://passport-service:8080/api/v1")).unwrap();
        let batch_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            client.batch_url(batch_id),
            "http://passport-service:8080/api/v1/batches/550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_batch_url_trailing_slash() {
        let client = PassportClient::new(&config("http://localhost:9000/api/v1//")).unwrap();
        let batch_id = Uuid::nil();
        assert_eq!(
            client.batch_url(batch_id),
            format!("http://localhost:9000/api/v1/batches/{}", batch_id)
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body: PassportBatchResponse = serde_json::from_str(
            r#"{"id":"b1","product":"Frozen peas","min_temp":-25.0,"max_temp":-18}"#,
        )
        .unwrap();
        assert_eq!(body.min_temp, Some(-25.0));
        assert_eq!(body.max_temp, Some(-18.0));
    }

    #[test]
    fn test_response_null_bound() {
        let body: PassportBatchResponse =
            serde_json::from_str(r#"{"min_temp":null,"max_temp":4.0}"#).unwrap();
        assert_eq!(body.min_temp, None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PassportError::Status(StatusCode::NOT_FOUND).to_string(),
            "passport service returned 404 Not Found"
        );
        assert_eq!(
            PassportError::Timeout(3000).to_string(),
            "passport service timed out after 3000ms"
        );
    }
}
