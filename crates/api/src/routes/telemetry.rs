//! Telemetry ingestion and batch query handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Alert, IngestTelemetryRequest, Reading};

use crate::app::AppState;
use crate::error::ApiError;

/// Ingest one reading.
///
/// POST /api/v1/telemetry
///
/// Responds 200 with an empty body once the reading is stored, whether or not
/// it violated the batch limits.
pub async fn ingest_telemetry(
    State(state): State<AppState>,
    payload: Result<Json<IngestTelemetryRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected telemetry body");
        ApiError::Validation("Invalid request body".to_string())
    })?;

    state.telemetry.ingest(request).await?;
    Ok(StatusCode::OK)
}

/// Readings of a batch, most recent first.
///
/// GET /api/v1/telemetry/:batch_id
pub async fn get_readings(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let readings = state.telemetry.get_readings(&batch_id).await?;
    Ok(Json(readings))
}

/// Alerts of a batch, most recent first.
///
/// GET /api/v1/telemetry/:batch_id/alerts
pub async fn get_alerts(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let alerts = state.telemetry.get_alerts(&batch_id).await?;
    Ok(Json(alerts))
}
