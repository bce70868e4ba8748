//! Domain models for cold-chain telemetry.

pub mod alert;
pub mod batch_limits;
pub mod reading;

pub use alert::{Alert, ViolationKind};
pub use batch_limits::{BatchLimits, LimitsResolution};
pub use reading::{IngestTelemetryRequest, Reading};
