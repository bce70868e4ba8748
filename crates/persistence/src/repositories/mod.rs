//! Repository implementations for database operations.

pub mod alert;
pub mod reading;

pub use alert::AlertRepository;
pub use reading::ReadingRepository;
