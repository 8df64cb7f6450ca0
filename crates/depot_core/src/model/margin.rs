//! Per-product margin entry.
//!
//! # Responsibility
//! - Define the purchase/sale price pair and quantity used for margin
//!   analysis.
//!
//! # Invariants
//! - Unit and line margins are always derived, never stored.

use serde::{Deserialize, Serialize};

use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// Margin analysis entry for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginEntry {
    pub id: RecordId,
    /// Product designation (free text).
    pub product: String,
    /// Purchase price per unit.
    pub purchase_price: u32,
    /// Sale price per unit.
    pub sale_price: u32,
    /// Units sold over the analysed period.
    pub quantity_sold: u32,
}

impl MarginEntry {
    /// Creates a margin entry with a fresh creation-time id.
    pub fn new(
        product: impl Into<String>,
        purchase_price: u32,
        sale_price: u32,
        quantity_sold: u32,
    ) -> Self {
        Self {
            id: RecordId::now(),
            product: product.into(),
            purchase_price,
            sale_price,
            quantity_sold,
        }
    }

    /// Unit margin: sale price − purchase price. Signed; selling at a loss
    /// is representable.
    pub fn unit_margin(&self) -> i64 {
        i64::from(self.sale_price) - i64::from(self.purchase_price)
    }

    /// Line margin: unit margin × quantity sold.
    pub fn line_margin(&self) -> i64 {
        self.unit_margin() * i64::from(self.quantity_sold)
    }
}

impl Record for MarginEntry {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("product", &self.product)
    }
}

#[cfg(test)]
mod tests {
    use super::MarginEntry;

    #[test]
    fn line_margin_multiplies_unit_margin_by_quantity() {
        let entry = MarginEntry::new("Castel 33", 1800, 2500, 85);
        assert_eq!(entry.unit_margin(), 700);
        assert_eq!(entry.line_margin(), 59_500);
    }

    #[test]
    fn loss_making_entry_has_negative_margin() {
        let entry = MarginEntry::new("Vin 50", 2500, 1800, 3);
        assert_eq!(entry.unit_margin(), -700);
        assert_eq!(entry.line_margin(), -2100);
    }
}
