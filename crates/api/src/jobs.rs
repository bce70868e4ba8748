//! Background tasks.

use std::time::Duration;

use sqlx::PgPool;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How often connection pool gauges are refreshed.
pub const POOL_METRICS_PERIOD: Duration = Duration::from_secs(10);

/// Periodically records connection pool gauges until `shutdown` flips to true.
pub fn spawn_pool_metrics(
    pool: PgPool,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    persistence::metrics::record_pool_metrics(&pool);
                    debug!("Recorded pool metrics");
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Pool metrics task stopped");
                        break;
                    }
                }
            }
        }
    })
}
