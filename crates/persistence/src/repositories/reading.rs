//! Telemetry reading repository.

use async_trait::async_trait;
use domain::errors::StorageError;
use domain::models::Reading;
use domain::services::ReadingStore;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReadingEntity;
use crate::metrics::QueryTimer;

/// Repository for telemetry reading database operations.
#[derive(Clone)]
pub struct ReadingRepository {
    pool: PgPool,
}

impl ReadingRepository {
    /// Creates a new ReadingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a reading row.
    pub async fn insert(&self, reading: &Reading) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("insert_reading");
        let result = sqlx::query(
            r#"
            INSERT INTO telemetry_readings (
                id,
                batch_id,
                timestamp,
                temperature_celsius,
                location_lat,
                location_lon,
                device_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reading.id)
        .bind(reading.batch_id)
        .bind(reading.timestamp)
        .bind(reading.temperature_celsius)
        .bind(reading.location_lat)
        .bind(reading.location_lon)
        .bind(&reading.device_id)
        .execute(&self.pool)
        .await;
        timer.record();

        result.map(|_| ())
    }

    /// Finds all readings of a batch, most recent first.
    pub async fn find_by_batch_id(&self, batch_id: Uuid) -> Result<Vec<ReadingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_readings_by_batch");
        let result = sqlx::query_as::<_, ReadingEntity>(
            r#"
            SELECT id, batch_id, timestamp, temperature_celsius,
                   location_lat, location_lon, device_id
            FROM telemetry_readings
            WHERE batch_id = $1
            ORDER BY timestamp DESC
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
impl ReadingStore for ReadingRepository {
    async fn save(&self, reading: &Reading) -> Result<(), StorageError> {
        self.insert(reading)
            .await
            .map_err(|e| StorageError::new("save reading", e))
    }

    async fn get_by_batch(&self, batch_id: Uuid) -> Result<Vec<Reading>, StorageError> {
        let rows = self
            .find_by_batch_id(batch_id)
            .await
            .map_err(|e| StorageError::new("load readings", e))?;
        Ok(rows.into_iter().map(Reading::from).collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| StorageError::new("ping store", e))
    }
}
