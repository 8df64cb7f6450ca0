//! Expense record.

use serde::{Deserialize, Serialize};

use crate::model::date::DayStamp;
use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    /// What the money was spent on.
    pub description: String,
    /// Expense family used for grouping (transport, maintenance, ...).
    pub category: String,
    /// Amount spent.
    pub amount: u32,
    /// Day of the expense.
    pub date: DayStamp,
}

impl Expense {
    /// Creates an expense with a fresh creation-time id.
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: u32,
        date: DayStamp,
    ) -> Self {
        Self {
            id: RecordId::now(),
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }
}

impl Record for Expense {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("description", &self.description)?;
        require_text("category", &self.category)?;
        Ok(())
    }
}
