//! Daily sale sheet and financial recap.
//!
//! # Responsibility
//! - Expand sale lines into the printed daily sheet rows.
//! - Net the day's money flows into one recap figure.

use crate::model::credit::Credit;
use crate::model::date::DayStamp;
use crate::model::expense::Expense;
use crate::model::purchase::PurchaseOrder;
use crate::model::sale::SaleLine;
use crate::report::{credits, expenses, purchases, sales};

/// One row of the printed daily sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLine {
    pub product: String,
    pub opening: u32,
    pub received: u32,
    /// opening + received.
    pub total_available: u64,
    pub sold: u32,
    pub unit_price: u32,
    /// quantity sold × unit price.
    pub revenue: u64,
    /// Signed closing quantity after sales.
    pub closing: i64,
}

/// Money flows netted for the recap block of the daily sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialRecap {
    pub sales: u64,
    pub purchases: u64,
    pub expenses: u64,
    pub credits_granted: u64,
    /// Amount set aside; carried as an input, not derived.
    pub savings: u64,
    /// sales − purchases − expenses − credits granted.
    pub net_balance: i64,
}

/// Expands sale lines into sheet rows, in collection order.
pub fn sheet_lines(lines: &[SaleLine]) -> Vec<SheetLine> {
    lines
        .iter()
        .map(|line| SheetLine {
            product: line.product.clone(),
            opening: line.opening,
            received: line.received,
            total_available: line.total_available(),
            sold: line.sold,
            unit_price: line.unit_price,
            revenue: line.revenue(),
            closing: line.closing_quantity(),
        })
        .collect()
}

/// Nets the day's flows. `day` scopes the date-bearing collections;
/// sale lines carry no date and always total the whole collection.
pub fn financial_recap(
    sale_lines: &[SaleLine],
    purchase_orders: &[PurchaseOrder],
    expense_records: &[Expense],
    credit_records: &[Credit],
    savings: u64,
    day: Option<&DayStamp>,
) -> FinancialRecap {
    let sales = sales::total_revenue(sale_lines);
    let purchases = purchases::total_amount(purchase_orders, day);
    let expenses = expenses::total(expense_records, day);
    let credits_granted = credits::total_granted(credit_records, day);

    FinancialRecap {
        sales,
        purchases,
        expenses,
        credits_granted,
        savings,
        net_balance: sales as i64
            - purchases as i64
            - expenses as i64
            - credits_granted as i64,
    }
}
