//! Threshold-violation alert domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Kind of temperature violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    TempLow,
    TempHigh,
}

impl ViolationKind {
    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::TempLow => "TEMP_LOW",
            ViolationKind::TempHigh => "TEMP_HIGH",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TEMP_LOW" => Ok(ViolationKind::TempLow),
            "TEMP_HIGH" => Ok(ViolationKind::TempHigh),
            other => Err(format!("unknown violation kind: {}", other)),
        }
    }
}

/// Audit record of one detected threshold violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub batch_id: Uuid,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub device_id: String,
}
