//! Expense summaries.
//!
//! # Invariants
//! - Category totals keep first-encounter category order.
//! - Day scoping is the caller's choice; `None` totals the whole
//!   collection.

use crate::model::date::DayStamp;
use crate::model::expense::Expense;

/// Total of one expense category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: u64,
}

/// Total spent, optionally scoped to one day.
pub fn total(expenses: &[Expense], day: Option<&DayStamp>) -> u64 {
    expenses
        .iter()
        .filter(|expense| day.map_or(true, |day| &expense.date == day))
        .map(|expense| u64::from(expense.amount))
        .sum()
}

/// Totals per category, in first-encounter order.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.amount += u64::from(expense.amount),
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                amount: u64::from(expense.amount),
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::{total, totals_by_category};
    use crate::model::date::DayStamp;
    use crate::model::expense::Expense;

    fn expense(description: &str, category: &str, amount: u32, date: &str) -> Expense {
        Expense::new(description, category, amount, DayStamp::parse(date).unwrap())
    }

    #[test]
    fn day_scoped_total_counts_matching_days_only() {
        let expenses = vec![
            expense("Transport marchandises", "Transport", 35_000, "2026-02-22"),
            expense("Électricité bureau", "Charges", 45_000, "2026-02-21"),
            expense("Frais de déchargement", "Transport", 15_000, "2026-02-22"),
        ];
        let day = DayStamp::parse("2026-02-22").unwrap();
        assert_eq!(total(&expenses, Some(&day)), 50_000);
        assert_eq!(total(&expenses, None), 95_000);
    }

    #[test]
    fn category_totals_keep_first_encounter_order() {
        let expenses = vec![
            expense("Transport marchandises", "Transport", 35_000, "2026-02-22"),
            expense("Réparation réfrigérateur", "Maintenance", 75_000, "2026-02-22"),
            expense("Carburant livraison", "Transport", 20_000, "2026-02-20"),
        ];
        let totals = totals_by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Transport");
        assert_eq!(totals[0].amount, 55_000);
        assert_eq!(totals[1].category, "Maintenance");
        assert_eq!(totals[1].amount, 75_000);
    }
}
