//! Telemetry alert entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Alert, ViolationKind};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the telemetry_alerts table.
#[derive(Debug, Clone, FromRow)]
pub struct AlertEntity {
    pub id: Uuid,
    pub batch_id: Uuid,
    #[sqlx(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub device_id: String,
}

impl TryFrom<AlertEntity> for Alert {
    type Error = String;

    fn try_from(entity: AlertEntity) -> Result<Self, Self::Error> {
        let kind: ViolationKind = entity.alert_type.parse()?;
        Ok(Self {
            id: entity.id,
            batch_id: entity.batch_id,
            kind,
            message: entity.message,
            created_at: entity.created_at,
            device_id: entity.device_id,
        })
    }
}
