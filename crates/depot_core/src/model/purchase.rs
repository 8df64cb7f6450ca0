//! Purchase order record.

use serde::{Deserialize, Serialize};

use crate::model::date::DayStamp;
use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Reception state of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Goods received at the depot.
    Received,
    /// Ordered, awaiting reception.
    Pending,
}

/// One purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: RecordId,
    /// Human-facing order reference (e.g. `ACH-2026-00012`).
    pub reference: String,
    /// Supplier the order was placed with.
    pub supplier: String,
    /// Source depot the goods ship from.
    pub depot: String,
    /// Free-text description of the ordered products.
    pub products: String,
    /// Total order amount.
    pub amount: u32,
    /// Order day.
    pub date: DayStamp,
    pub status: PurchaseStatus,
}

impl PurchaseOrder {
    /// Creates a purchase order with a fresh creation-time id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference: impl Into<String>,
        supplier: impl Into<String>,
        depot: impl Into<String>,
        products: impl Into<String>,
        amount: u32,
        date: DayStamp,
        status: PurchaseStatus,
    ) -> Self {
        Self {
            id: RecordId::now(),
            reference: reference.into(),
            supplier: supplier.into(),
            depot: depot.into(),
            products: products.into(),
            amount,
            date,
            status,
        }
    }
}

impl Record for PurchaseOrder {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("reference", &self.reference)?;
        require_text("supplier", &self.supplier)?;
        require_text("products", &self.products)?;
        Ok(())
    }
}
