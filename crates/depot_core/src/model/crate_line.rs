//! Returnable-crate ledger line.
//!
//! # Responsibility
//! - Track crates received from and returned to one supplier, per crate
//!   type.
//!
//! # Invariants
//! - `available`, `full` and `empty` are stored as counted on the floor;
//!   no arithmetic ties them to `received`/`returned`.
//! - The outstanding count and the must-return flag are always derived.

use serde::{Deserialize, Serialize};

use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Outstanding crates above this count must go back to the supplier.
/// Fixed depot policy, deliberately not configurable per supplier.
pub const MUST_RETURN_THRESHOLD: i64 = 10;

/// Crate ledger line for one supplier and crate type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateLine {
    pub id: RecordId,
    /// Supplier owning the crates.
    pub supplier: String,
    /// Crate format, e.g. `33cl (24 trous)`.
    pub crate_type: String,
    /// Crates received from the supplier.
    pub received: u32,
    /// Crates returned to the supplier.
    pub returned: u32,
    /// Crates counted available on the floor.
    pub available: u32,
    /// Crates counted full.
    pub full: u32,
    /// Crates counted empty.
    pub empty: u32,
}

impl CrateLine {
    /// Creates a crate line with a fresh creation-time id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        supplier: impl Into<String>,
        crate_type: impl Into<String>,
        received: u32,
        returned: u32,
        available: u32,
        full: u32,
        empty: u32,
    ) -> Self {
        Self {
            id: RecordId::now(),
            supplier: supplier.into(),
            crate_type: crate_type.into(),
            received,
            returned,
            available,
            full,
            empty,
        }
    }

    /// Crates still held: received − returned. Signed for inconsistent
    /// counts.
    pub fn outstanding(&self) -> i64 {
        i64::from(self.received) - i64::from(self.returned)
    }

    /// Whether this line exceeds the return policy threshold.
    pub fn must_return(&self) -> bool {
        self.outstanding() > MUST_RETURN_THRESHOLD
    }
}

impl Record for CrateLine {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("supplier", &self.supplier)?;
        require_text("crate_type", &self.crate_type)?;
        Ok(())
    }
}
