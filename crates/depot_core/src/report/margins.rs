//! Margin summaries.
//!
//! # Invariants
//! - Ties for the best product resolve to the first maximal entry in
//!   collection order.
//! - Ratios over a zero or empty total are defined as 0, never a division
//!   error.

use crate::model::margin::MarginEntry;

/// Total margin: Σ line margins over all entries.
pub fn total_margin(entries: &[MarginEntry]) -> i64 {
    entries.iter().map(MarginEntry::line_margin).sum()
}

/// Entry with the highest line margin; the first maximal entry wins ties.
pub fn best_product(entries: &[MarginEntry]) -> Option<&MarginEntry> {
    entries.iter().reduce(|best, entry| {
        if entry.line_margin() > best.line_margin() {
            entry
        } else {
            best
        }
    })
}

/// Share of the collection's total margin contributed by `entry`, in
/// percent. Defined as 0 when the total margin is 0.
pub fn share_percent(entry: &MarginEntry, entries: &[MarginEntry]) -> f64 {
    let total = total_margin(entries);
    if total == 0 {
        return 0.0;
    }
    entry.line_margin() as f64 / total as f64 * 100.0
}

/// Mean line margin per entry, rounded toward zero. 0 for an empty
/// collection.
pub fn average_margin(entries: &[MarginEntry]) -> i64 {
    if entries.is_empty() {
        return 0;
    }
    total_margin(entries) / entries.len() as i64
}
