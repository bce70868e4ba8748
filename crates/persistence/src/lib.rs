//! Persistence layer for the cold-chain telemetry service.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations of the domain storage seams

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
