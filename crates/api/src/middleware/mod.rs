//! HTTP middleware components.

pub mod logging;
pub mod metrics;
pub mod roles;
pub mod security_headers;
pub mod trace_id;

pub use metrics::{init_metrics, metrics_handler, metrics_middleware};
pub use roles::{require_ingest_role, USER_ROLE_HEADER};
pub use security_headers::security_headers_middleware;
pub use trace_id::{trace_id, RequestId, REQUEST_ID_HEADER};
