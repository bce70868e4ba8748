//! Domain services for cold-chain telemetry.
//!
//! Services contain the ingestion logic and the seams it runs against.

pub mod alert_recorder;
pub mod classifier;
pub mod limits;
pub mod storage;
pub mod telemetry;

pub use alert_recorder::AlertRecorder;
pub use classifier::{classify, Violation, FALLBACK_CEILING_CELSIUS};
pub use limits::{LimitsResolver, StaticLimitsResolver};
pub use storage::{AlertStore, InMemoryAlertStore, InMemoryReadingStore, InMemoryStore, ReadingStore};
pub use telemetry::TelemetryService;
