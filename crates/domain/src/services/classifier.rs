//! Temperature violation classification.
//!
//! Pure decision logic: no I/O, no clock, no logging.

use crate::models::{LimitsResolution, ViolationKind};

/// Ceiling applied when a batch's own limits cannot be resolved.
///
/// Frozen-chain products must stay at or below -18 °C.
pub const FALLBACK_CEILING_CELSIUS: f64 = -18.0;

/// A classified violation together with its audit message.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

/// Decides whether `temperature` violates the resolved limits.
///
/// With resolved limits the low bound is checked before the high bound, so an
/// inverted envelope reports `TEMP_LOW`. Without limits the reading is held
/// against [`FALLBACK_CEILING_CELSIUS`] and can only yield `TEMP_HIGH`.
pub fn classify(temperature: f64, limits: &LimitsResolution) -> Option<Violation> {
    match limits {
        LimitsResolution::Resolved(limits) => {
            if temperature < limits.min_temp {
                Some(Violation {
                    kind: ViolationKind::TempLow,
                    message: format!(
                        "Temperature {:.2}°C is below minimum {:.2}°C",
                        temperature, limits.min_temp
                    ),
                })
            } else if temperature > limits.max_temp {
                Some(Violation {
                    kind: ViolationKind::TempHigh,
                    message: format!(
                        "Temperature {:.2}°C is above maximum {:.2}°C",
                        temperature, limits.max_temp
                    ),
                })
            } else {
                None
            }
        }
        LimitsResolution::Unavailable(_) => {
            if temperature > FALLBACK_CEILING_CELSIUS {
                Some(Violation {
                    kind: ViolationKind::TempHigh,
                    message: format!(
                        "Temperature {:.2}°C is above legacy threshold {:.2}°C (batch limits unavailable, legacy threshold applied)",
                        temperature, FALLBACK_CEILING_CELSIUS
                    ),
                })
            } else {
                None
            }
        }
    }
}
