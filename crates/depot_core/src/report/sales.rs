//! Sales summaries.

use crate::model::sale::SaleLine;

/// Total revenue: Σ quantity sold × unit price over all lines.
pub fn total_revenue(lines: &[SaleLine]) -> u64 {
    lines.iter().map(SaleLine::revenue).sum()
}

/// Last `count` lines in collection (encounter) order, most recent last.
pub fn recent_lines(lines: &[SaleLine], count: usize) -> &[SaleLine] {
    &lines[lines.len().saturating_sub(count)..]
}
