//! Telemetry ingestion pipeline.
//!
//! One ingestion call runs, in order:
//! 1. validation (no I/O before it passes),
//! 2. limits lookup (never fails the call),
//! 3. classification,
//! 4. alert recording when a violation was found (best effort),
//! 5. reading persistence (authoritative: its failure fails the call).

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{StorageError, TelemetryError};
use crate::models::{Alert, IngestTelemetryRequest, Reading};
use crate::services::alert_recorder::AlertRecorder;
use crate::services::classifier::classify;
use crate::services::limits::LimitsResolver;
use crate::services::storage::{AlertStore, ReadingStore};

/// Orchestrates ingestion and the batch read paths.
///
/// Holds no per-call mutable state; one instance is shared by all requests.
#[derive(Clone)]
pub struct TelemetryService {
    readings: Arc<dyn ReadingStore>,
    alerts: AlertRecorder,
    limits: Arc<dyn LimitsResolver>,
}

impl TelemetryService {
    pub fn new(
        readings: Arc<dyn ReadingStore>,
        alerts: Arc<dyn AlertStore>,
        limits: Arc<dyn LimitsResolver>,
    ) -> Self {
        Self {
            readings,
            alerts: AlertRecorder::new(alerts),
            limits,
        }
    }

    /// Ingest one reading.
    ///
    /// Returns `Validation` for a malformed batch id or a missing device id,
    /// and `Storage` only when the reading itself could not be stored.
    pub async fn ingest(&self, request: IngestTelemetryRequest) -> Result<(), TelemetryError> {
        let batch_id = shared::validation::parse_batch_id(&request.batch_id)?;
        shared::validation::validate_device_id(&request.device_id)?;

        let limits = self.limits.resolve(batch_id).await;
        if !limits.is_resolved() {
            debug!(%batch_id, "Classifying with fallback threshold");
        }

        if let Some(violation) = classify(request.temperature_celsius, &limits) {
            warn!(
                %batch_id,
                device_id = %request.device_id,
                kind = %violation.kind,
                "Temperature violation detected: {}",
                violation.message
            );
            self.alerts
                .record(batch_id, violation.kind, violation.message, &request.device_id)
                .await;
        }

        let reading = Reading::from_request(batch_id, &request);
        self.readings.save(&reading).await?;

        info!(
            %batch_id,
            reading_id = %reading.id,
            device_id = %reading.device_id,
            temperature_celsius = reading.temperature_celsius,
            "Reading ingested"
        );

        Ok(())
    }

    /// Readings of a batch, most recent first.
    pub async fn get_readings(&self, batch_id: &str) -> Result<Vec<Reading>, TelemetryError> {
        let batch_id = shared::validation::parse_batch_id(batch_id)?;
        Ok(self.readings.get_by_batch(batch_id).await?)
    }

    /// Alerts of a batch, most recent first.
    pub async fn get_alerts(&self, batch_id: &str) -> Result<Vec<Alert>, TelemetryError> {
        let batch_id = shared::validation::parse_batch_id(batch_id)?;
        Ok(self.alerts.list(batch_id).await?)
    }

    /// Connectivity check of the reading store.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.readings.ping().await
    }
}
