//! Temperature envelope of a batch, as reported by the passport service.

use serde::{Deserialize, Serialize};

/// Minimum and maximum allowed temperature for a batch, in degrees Celsius.
///
/// Held only for the duration of one ingestion call; never persisted locally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchLimits {
    pub min_temp: f64,
    pub max_temp: f64,
}

/// Outcome of a limits lookup.
///
/// A failed lookup is a value, not an error: ingestion continues with the
/// fallback policy.
#[derive(Debug, Clone, PartialEq)]
pub enum LimitsResolution {
    Resolved(BatchLimits),
    Unavailable(String),
}

impl LimitsResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, LimitsResolution::Resolved(_))
    }
}

impl From<BatchLimits> for LimitsResolution {
    fn from(limits: BatchLimits) -> Self {
        LimitsResolution::Resolved(limits)
    }
}
