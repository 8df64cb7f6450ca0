//! Crate ledger summaries.

use crate::model::crate_line::CrateLine;

/// Crates still held across all suppliers: Σ received − returned.
pub fn total_outstanding(lines: &[CrateLine]) -> i64 {
    lines.iter().map(CrateLine::outstanding).sum()
}

/// Crates counted available on the floor.
pub fn total_available(lines: &[CrateLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.available)).sum()
}

/// Crates counted full.
pub fn total_full(lines: &[CrateLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.full)).sum()
}

/// Lines over the return policy threshold, in collection order.
pub fn must_return(lines: &[CrateLine]) -> Vec<&CrateLine> {
    lines.iter().filter(|line| line.must_return()).collect()
}
