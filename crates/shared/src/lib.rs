//! Shared utilities for the cold-chain telemetry backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Field validation helpers for identifiers arriving over the wire

pub mod validation;
