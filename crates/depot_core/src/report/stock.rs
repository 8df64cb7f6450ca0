//! Stock summaries.

use crate::model::stock::StockItem;

/// Items whose closing quantity sits at or below their reorder threshold,
/// in collection order.
pub fn critical_items(items: &[StockItem]) -> Vec<&StockItem> {
    items.iter().filter(|item| item.is_low()).collect()
}

/// Number of items at or below their reorder threshold.
pub fn critical_count(items: &[StockItem]) -> usize {
    items.iter().filter(|item| item.is_low()).count()
}

/// Value of all remaining stock at unit prices. Signed, since overdrawn
/// lines carry negative value.
pub fn total_stock_value(items: &[StockItem]) -> i64 {
    items.iter().map(StockItem::stock_value).sum()
}
