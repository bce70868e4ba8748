//! Best-effort persistence of threshold-violation alerts.

use std::error::Error as _;
use std::sync::Arc;

use chrono::Utc;
use tracing::error;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::models::{Alert, ViolationKind};
use crate::services::storage::AlertStore;

/// Turns classified violations into stored alerts.
///
/// Alerts are a secondary audit signal. A failed write is logged at error
/// level and reported as `None`; it never reaches the caller as an error.
#[derive(Clone)]
pub struct AlertRecorder {
    store: Arc<dyn AlertStore>,
}

impl AlertRecorder {
    pub fn new(store: Arc<dyn AlertStore>) -> Self {
        Self { store }
    }

    /// Builds an alert with a fresh id and creation time and stores it.
    ///
    /// Returns the stored alert, or `None` if the write failed.
    pub async fn record(
        &self,
        batch_id: Uuid,
        kind: ViolationKind,
        message: impl Into<String>,
        device_id: &str,
    ) -> Option<Alert> {
        let alert = Alert {
            id: Uuid::new_v4(),
            batch_id,
            kind,
            message: message.into(),
            created_at: Utc::now(),
            device_id: device_id.to_string(),
        };

        match self.store.save(&alert).await {
            Ok(()) => Some(alert),
            Err(e) => {
                error!(
                    %batch_id,
                    alert_id = %alert.id,
                    kind = %kind,
                    error = %e,
                    cause = ?e.source(),
                    "Failed to save alert"
                );
                None
            }
        }
    }

    /// All alerts of a batch, most recent first.
    pub async fn list(&self, batch_id: Uuid) -> Result<Vec<Alert>, StorageError> {
        self.store.get_by_batch(batch_id).await
    }
}
