//! Database metrics collection.
//!
//! Provides functions for recording database-related metrics.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record database query duration.
pub fn record_query_duration(query_name: &'static str, duration_secs: f64) {
    histogram!("database_query_duration_seconds", "query" => query_name).record(duration_secs);
}

/// Record database connection pool gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Count an alert that reached the database.
pub fn record_alert_stored(alert_type: &'static str) {
    counter!("telemetry_alerts_recorded_total", "type" => alert_type).increment(1);
}

/// Times one database operation.
///
/// ```ignore
/// let timer = QueryTimer::new("insert_reading");
/// let result = sqlx::query(...).execute(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_creation() {
        let timer = QueryTimer::new("insert_reading");
        assert_eq!(timer.query_name, "insert_reading");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        QueryTimer::new("find_readings_by_batch").record();
        record_alert_stored("TEMP_HIGH");
    }
}
