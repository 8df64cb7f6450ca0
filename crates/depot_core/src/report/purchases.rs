//! Purchase summaries.

use crate::model::date::DayStamp;
use crate::model::purchase::{PurchaseOrder, PurchaseStatus};

/// Total ordered amount, optionally scoped to one day.
pub fn total_amount(orders: &[PurchaseOrder], day: Option<&DayStamp>) -> u64 {
    orders
        .iter()
        .filter(|order| day.map_or(true, |day| &order.date == day))
        .map(|order| u64::from(order.amount))
        .sum()
}

/// Number of orders carrying the given status.
pub fn count_with_status(orders: &[PurchaseOrder], status: PurchaseStatus) -> usize {
    orders.iter().filter(|order| order.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::{count_with_status, total_amount};
    use crate::model::date::DayStamp;
    use crate::model::purchase::{PurchaseOrder, PurchaseStatus};

    fn order(reference: &str, amount: u32, date: &str, status: PurchaseStatus) -> PurchaseOrder {
        PurchaseOrder::new(
            reference,
            "SOLIBRA",
            "SOMODIS",
            "Bock 66 x48",
            amount,
            DayStamp::parse(date).unwrap(),
            status,
        )
    }

    #[test]
    fn totals_and_status_counts() {
        let orders = vec![
            order("ACH-2026-00012", 345_600, "2026-02-22", PurchaseStatus::Received),
            order("ACH-2026-00010", 120_000, "2026-02-21", PurchaseStatus::Pending),
        ];
        assert_eq!(total_amount(&orders, None), 465_600);
        let day = DayStamp::parse("2026-02-21").unwrap();
        assert_eq!(total_amount(&orders, Some(&day)), 120_000);
        assert_eq!(count_with_status(&orders, PurchaseStatus::Received), 1);
        assert_eq!(count_with_status(&orders, PurchaseStatus::Pending), 1);
    }
}
