//! Domain layer for the cold-chain telemetry service.
//!
//! This crate contains:
//! - Domain models (Reading, Alert, BatchLimits)
//! - The ingestion pipeline and violation classifier
//! - Storage and limits-lookup seams with in-memory implementations
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;
