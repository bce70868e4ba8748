//! Outbound service clients.

pub mod passport;

pub use passport::{PassportClient, PassportError};
