//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod alert;
pub mod reading;

pub use alert::AlertEntity;
pub use reading::ReadingEntity;
