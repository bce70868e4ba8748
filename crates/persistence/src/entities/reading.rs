//! Telemetry reading entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the telemetry_readings table.
#[derive(Debug, Clone, FromRow)]
pub struct ReadingEntity {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    pub location_lat: Option<f64>,
    pub location_lon: Option<f64>,
    pub device_id: String,
}

impl From<ReadingEntity> for domain::models::Reading {
    fn from(entity: ReadingEntity) -> Self {
        Self {
            id: entity.id,
            batch_id: entity.batch_id,
            timestamp: entity.timestamp,
            temperature_celsius: entity.temperature_celsius,
            location_lat: entity.location_lat,
            location_lon: entity.location_lon,
            device_id: entity.device_id,
        }
    }
}
