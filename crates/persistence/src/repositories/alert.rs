//! Telemetry alert repository.

use async_trait::async_trait;
use domain::errors::StorageError;
use domain::models::Alert;
use domain::services::AlertStore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::AlertEntity;
use crate::metrics::{record_alert_stored, QueryTimer};

/// Repository for telemetry alert database operations.
#[derive(Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    /// Creates a new alert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts an alert row.
    pub async fn insert(&self, alert: &Alert) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_alert");
        let result = sqlx::query(
            r#"
            INSERT INTO telemetry_alerts (id, batch_id, type, message, created_at, device_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(alert.id)
        .bind(alert.batch_id)
        .bind(alert.kind.as_str())
        .bind(&alert.message)
        .bind(alert.created_at)
        .bind(&alert.device_id)
        .execute(&self.pool)
        .await;
        timer.record();

        result.map(|_| ())
    }

    /// Finds all alerts of a batch, most recent first.
    pub async fn find_by_batch_id(&self, batch_id: Uuid) -> Result<Vec<AlertEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_alerts_by_batch");
        let result = sqlx::query_as::<_, AlertEntity>(
            r#"
            SELECT id, batch_id, type, message, created_at, device_id
            FROM telemetry_alerts
            WHERE batch_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(batch_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        result
    }
}

#[async_trait]
impl AlertStore for AlertRepository {
    async fn save(&self, alert: &Alert) -> Result<(), StorageError> {
        self.insert(alert)
            .await
            .map_err(|e| StorageError::new("save alert", e))?;
        record_alert_stored(alert.kind.as_str());
        Ok(())
    }

    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Alert>, StorageError> {
        let rows = self
            .find_by_batch_id(batch_id)
            .await
            .map_err(|e| StorageError::new("load alerts", e))?;
        rows.into_iter()
            .map(Alert::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::new("load alerts", e))
    }
}
