//! Partner / tax obligation record.

use serde::{Deserialize, Serialize};

use crate::model::date::DayStamp;
use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Payment state of an obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    /// Settled.
    Paid,
    /// Still owed.
    Due,
}

/// One fiscal or partner obligation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: RecordId,
    /// Organism or partner owed (tax office, social fund, ...).
    pub name: String,
    /// Obligation family (VAT, local taxes, ...).
    pub category: String,
    /// Amount owed.
    pub amount: u32,
    /// Payment deadline.
    pub due_date: DayStamp,
    pub status: PartnerStatus,
}

impl Partner {
    /// Creates an obligation with a fresh creation-time id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: u32,
        due_date: DayStamp,
        status: PartnerStatus,
    ) -> Self {
        Self {
            id: RecordId::now(),
            name: name.into(),
            category: category.into(),
            amount,
            due_date,
            status,
        }
    }
}

impl Record for Partner {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("category", &self.category)?;
        Ok(())
    }
}
