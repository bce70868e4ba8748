//! Telemetry reading domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One temperature/location measurement recorded against a batch.
///
/// Readings are append-only: once stored they are never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: Uuid,
    pub batch_id: Uuid,
    /// Assigned by the service at ingestion time, never by the client.
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_lon: Option<f64>,
    pub device_id: String,
}

impl Reading {
    /// Builds a reading from a validated request, assigning a fresh id and the current time.
    pub fn from_request(batch_id: Uuid, request: &IngestTelemetryRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            batch_id,
            timestamp: Utc::now(),
            temperature_celsius: request.temperature_celsius,
            location_lat: request.location_lat,
            location_lon: request.location_lon,
            device_id: request.device_id.clone(),
        }
    }
}

/// Request payload for `POST /api/v1/telemetry`.
///
/// `batch_id` and `device_id` default to empty strings when absent so that the
/// ingestion pipeline reports them through its own ordered validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestTelemetryRequest {
    #[serde(default)]
    pub batch_id: String,

    #[serde(rename = "temp")]
    pub temperature_celsius: f64,

    #[serde(rename = "lat", default, skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<f64>,

    #[serde(rename = "lon", default, skip_serializing_if = "Option::is_none")]
    pub location_lon: Option<f64>,

    #[serde(default)]
    pub device_id: String,
}
