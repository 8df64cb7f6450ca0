//! Daily sale sheet line.
//!
//! # Responsibility
//! - Define one product row of the daily sale sheet.
//!
//! # Invariants
//! - Line revenue is always derived from quantity sold × unit price.

use serde::{Deserialize, Serialize};

use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// One product row of the daily sale sheet.
///
/// The product name is free text, not a reference into the stock
/// collection; the two ledgers are deliberately uncoupled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub id: RecordId,
    /// Product designation (free text).
    pub product: String,
    /// Quantity on hand at day start.
    pub opening: u32,
    /// Quantity received during the day.
    pub received: u32,
    /// Quantity sold.
    pub sold: u32,
    /// Selling price per unit.
    pub unit_price: u32,
}

impl SaleLine {
    /// Creates a sale line with a fresh creation-time id.
    pub fn new(
        product: impl Into<String>,
        opening: u32,
        received: u32,
        sold: u32,
        unit_price: u32,
    ) -> Self {
        Self {
            id: RecordId::now(),
            product: product.into(),
            opening,
            received,
            sold,
            unit_price,
        }
    }

    /// Total quantity available for sale: opening + received.
    pub fn total_available(&self) -> u64 {
        u64::from(self.opening) + u64::from(self.received)
    }

    /// Closing quantity after sales. Signed for inconsistent entries.
    pub fn closing_quantity(&self) -> i64 {
        self.total_available() as i64 - i64::from(self.sold)
    }

    /// Line revenue: quantity sold × unit price.
    pub fn revenue(&self) -> u64 {
        u64::from(self.sold) * u64::from(self.unit_price)
    }
}

impl Record for SaleLine {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("product", &self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::SaleLine;

    #[test]
    fn revenue_is_sold_times_unit_price() {
        let line = SaleLine::new("Bock 66", 120, 48, 65, 3000);
        assert_eq!(line.revenue(), 195_000);
        assert_eq!(line.total_available(), 168);
        assert_eq!(line.closing_quantity(), 103);
    }
}
