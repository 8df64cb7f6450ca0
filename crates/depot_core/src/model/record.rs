//! Shared record identity and validation plumbing.
//!
//! # Responsibility
//! - Define the stable identifier carried by every collection record.
//! - Define the `Record` contract enforced by the store on every write.
//!
//! # Invariants
//! - A `RecordId` is assigned once at creation time and never recomputed.
//! - Ids are practically unique within one collection (creation-time
//!   granularity), not across collections.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for one collection record.
///
/// Wraps the Unix epoch milliseconds observed when the record was created,
/// which is exactly what the persisted format stores. Seed records carry
/// small fixed values instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wraps a known raw id value (seed data, tests, decoded records).
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Assigns a fresh creation-time id.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        Self(millis)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Required-field validation failure.
///
/// Raised before any persistence side effect; the collection is left
/// unchanged when validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField { field: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for ValidationError {}

/// Contract every collection record satisfies.
pub trait Record {
    /// Returns the stable record identifier.
    fn id(&self) -> RecordId;

    /// Rejects records that must not reach the store (required fields).
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Rejects empty or whitespace-only required text fields.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_text, RecordId, ValidationError};

    #[test]
    fn fresh_ids_are_monotonic_enough() {
        let first = RecordId::now();
        let second = RecordId::now();
        assert!(second >= first);
    }

    #[test]
    fn require_text_rejects_whitespace_only_values() {
        let err = require_text("client", "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "client" });
        assert!(require_text("client", "Koné Amadou").is_ok());
    }
}
