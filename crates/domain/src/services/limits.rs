//! Batch limits lookup.
//!
//! The passport service is a soft dependency: resolvers report failures as
//! [`LimitsResolution::Unavailable`] instead of returning an error.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::models::{BatchLimits, LimitsResolution};

/// Source of temperature limits for a batch.
#[async_trait::async_trait]
pub trait LimitsResolver: Send + Sync {
    /// Resolve the limits of `batch_id`. Never fails; implementations log the
    /// reason when returning `Unavailable`.
    async fn resolve(&self, batch_id: Uuid) -> LimitsResolution;
}

/// Resolver returning a fixed outcome for every batch.
///
/// Used in tests and for running the service without a passport service.
#[derive(Debug)]
pub struct StaticLimitsResolver {
    resolution: LimitsResolution,
    calls: AtomicUsize,
}

impl StaticLimitsResolver {
    pub fn new(resolution: LimitsResolution) -> Self {
        Self {
            resolution,
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolver that always returns the given bounds.
    pub fn resolved(min_temp: f64, max_temp: f64) -> Self {
        Self::new(LimitsResolution::Resolved(BatchLimits { min_temp, max_temp }))
    }

    /// Resolver that always reports the limits as unavailable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(LimitsResolution::Unavailable(reason.into()))
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LimitsResolver for StaticLimitsResolver {
    async fn resolve(&self, batch_id: Uuid) -> LimitsResolution {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let LimitsResolution::Unavailable(ref reason) = self.resolution {
            tracing::warn!(%batch_id, reason = %reason, "Batch limits unavailable");
        }
        self.resolution.clone()
    }
}
