//! Common validation utilities.

use uuid::Uuid;
use validator::ValidationError;

/// Parses a batch identifier, which must be a UUID in any of its textual forms.
pub fn parse_batch_id(raw: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(raw).map_err(|_| {
        let mut err = ValidationError::new("batch_id_format");
        err.message = Some("invalid batch_id".into());
        err
    })
}

/// Validates that a device identifier is present. Any non-empty string is accepted.
pub fn validate_device_id(device_id: &str) -> Result<(), ValidationError> {
    if device_id.is_empty() {
        let mut err = ValidationError::new("device_id_required");
        err.message = Some("device_id is required".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Returns the human-readable message of a validation error, falling back to its code.
pub fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}
