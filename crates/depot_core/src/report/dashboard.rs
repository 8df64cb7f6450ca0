//! Cross-collection dashboard summary.
//!
//! # Responsibility
//! - Derive the console's headline figures by reading several collections
//!   in one pass.
//!
//! # Invariants
//! - Derivation is pure; the summary is recomputed from current
//!   collection contents on every call.

use crate::model::crate_line::CrateLine;
use crate::model::credit::Credit;
use crate::model::expense::Expense;
use crate::model::margin::MarginEntry;
use crate::model::sale::SaleLine;
use crate::model::stock::StockItem;
use crate::report::{crates, credits, expenses, margins, sales, stock};

/// Headline figures shown on the console dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Σ quantity sold × unit price over all sale lines.
    pub total_sales_revenue: u64,
    /// Stock items at or below their reorder threshold.
    pub critical_stock_count: usize,
    /// Σ principal − repaid over all credits.
    pub outstanding_receivables: i64,
    /// Σ expense amounts (whole collection; callers wanting day scoping
    /// use `report::expenses::total` directly).
    pub total_expenses: u64,
    /// Σ line margins over all margin entries.
    pub total_margin: i64,
    /// Product of the best-margin entry; first maximal wins ties.
    pub best_margin_product: Option<String>,
    /// Crates still held across all suppliers.
    pub crates_outstanding: i64,
    /// Crate lines over the return policy threshold.
    pub crates_must_return: usize,
}

/// Computes the dashboard summary from current collection contents.
pub fn summary(
    stocks: &[StockItem],
    sale_lines: &[SaleLine],
    margin_entries: &[MarginEntry],
    credit_records: &[Credit],
    expense_records: &[Expense],
    crate_lines: &[CrateLine],
) -> DashboardSummary {
    DashboardSummary {
        total_sales_revenue: sales::total_revenue(sale_lines),
        critical_stock_count: stock::critical_count(stocks),
        outstanding_receivables: credits::total_outstanding(credit_records),
        total_expenses: expenses::total(expense_records, None),
        total_margin: margins::total_margin(margin_entries),
        best_margin_product: margins::best_product(margin_entries)
            .map(|entry| entry.product.clone()),
        crates_outstanding: crates::total_outstanding(crate_lines),
        crates_must_return: crates::must_return(crate_lines).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::summary;
    use crate::seed;

    #[test]
    fn summary_is_idempotent_on_unchanged_collections() {
        let stocks = seed::stock_items();
        let sales = seed::sale_lines();
        let margins = seed::margin_entries();
        let credits = seed::credits();
        let expenses = seed::expenses();
        let crates = seed::crate_lines();

        let first = summary(&stocks, &sales, &margins, &credits, &expenses, &crates);
        let second = summary(&stocks, &sales, &margins, &credits, &expenses, &crates);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_matches_seed_figures() {
        let result = summary(
            &seed::stock_items(),
            &seed::sale_lines(),
            &seed::margin_entries(),
            &seed::credits(),
            &seed::expenses(),
            &seed::crate_lines(),
        );

        // Hand-checked against the seed sets.
        assert_eq!(result.total_sales_revenue, 959_000);
        assert_eq!(result.critical_stock_count, 2);
        assert_eq!(result.outstanding_receivables, 745_000);
        assert_eq!(result.total_expenses, 230_000);
        assert_eq!(result.total_margin, 245_100);
        assert_eq!(result.best_margin_product.as_deref(), Some("Castel 33"));
        assert_eq!(result.crates_outstanding, 70);
    }
}
