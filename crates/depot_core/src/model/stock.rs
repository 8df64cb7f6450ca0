//! Stock item record.
//!
//! # Responsibility
//! - Define the per-product stock sheet line and its derived quantities.
//!
//! # Invariants
//! - Stored quantities and prices are non-negative integers.
//! - The closing quantity is always derived, never stored.

use serde::{Deserialize, Serialize};

use crate::model::record::{require_text, Record, RecordId, ValidationError};

/// One product line of the stock ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stable record id, assigned at creation.
    pub id: RecordId,
    /// Product designation shown on the sheet.
    pub name: String,
    /// Supplying brewery/distributor.
    pub supplier: String,
    /// Free-text product family (beers, soft drinks, ...).
    pub category: String,
    /// Quantity on hand at period start.
    pub opening: u32,
    /// Quantity received during the period.
    pub received: u32,
    /// Quantity issued (sold or transferred out).
    pub issued: u32,
    /// Selling price per unit, in base currency units.
    pub unit_price: u32,
    /// Reorder threshold: at or below this closing quantity the item is low.
    pub threshold: u32,
}

impl StockItem {
    /// Creates a stock item with a fresh creation-time id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        supplier: impl Into<String>,
        category: impl Into<String>,
        opening: u32,
        received: u32,
        issued: u32,
        unit_price: u32,
        threshold: u32,
    ) -> Self {
        Self {
            id: RecordId::now(),
            name: name.into(),
            supplier: supplier.into(),
            category: category.into(),
            opening,
            received,
            issued,
            unit_price,
            threshold,
        }
    }

    /// Closing quantity: opening + received − issued.
    ///
    /// Signed, because issues can exceed availability in inconsistent books.
    pub fn closing_quantity(&self) -> i64 {
        i64::from(self.opening) + i64::from(self.received) - i64::from(self.issued)
    }

    /// Low-stock flag: closing quantity at or below the reorder threshold.
    pub fn is_low(&self) -> bool {
        self.closing_quantity() <= i64::from(self.threshold)
    }

    /// Value of the remaining stock at the unit price.
    pub fn stock_value(&self) -> i64 {
        self.closing_quantity() * i64::from(self.unit_price)
    }
}

impl Record for StockItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("supplier", &self.supplier)?;
        require_text("category", &self.category)?;
        Ok(())
    }
}
