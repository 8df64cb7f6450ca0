//! Client credit record.
//!
//! # Responsibility
//! - Define a credit granted to a client and its repayment progress.
//!
//! # Invariants
//! - `status` is stored as entered; it is never derived from the balance
//!   and may disagree with it.
//! - The outstanding balance is always derived.

use serde::{Deserialize, Serialize};

use crate::model::date::DayStamp;
use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Lifecycle state of a client credit, as recorded by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    /// Being repaid.
    InProgress,
    /// Fully repaid.
    Settled,
    /// Past its expected repayment.
    Overdue,
}

/// Credit granted to one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub id: RecordId,
    /// Client name.
    pub client: String,
    /// Contact phone, free text.
    pub phone: String,
    /// Principal amount granted.
    pub principal: u32,
    /// Amount repaid so far.
    pub repaid: u32,
    /// Day the credit was granted.
    pub date: DayStamp,
    /// Operator-recorded status; independent of the computed balance.
    pub status: CreditStatus,
}

impl Credit {
    /// Creates a credit with a fresh creation-time id.
    pub fn new(
        client: impl Into<String>,
        phone: impl Into<String>,
        principal: u32,
        repaid: u32,
        date: DayStamp,
        status: CreditStatus,
    ) -> Self {
        Self {
            id: RecordId::now(),
            client: client.into(),
            phone: phone.into(),
            principal,
            repaid,
            date,
            status,
        }
    }

    /// Outstanding balance: principal − repaid. Signed; over-repayment is
    /// representable.
    pub fn balance(&self) -> i64 {
        i64::from(self.principal) - i64::from(self.repaid)
    }
}

impl Record for Credit {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("client", &self.client)
    }
}
