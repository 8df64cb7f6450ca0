//! Credit summaries.

use crate::model::credit::{Credit, CreditStatus};
use crate::model::date::DayStamp;

/// Total outstanding receivables: Σ principal − repaid. Signed, since
/// over-repaid credits carry negative balances.
pub fn total_outstanding(credits: &[Credit]) -> i64 {
    credits.iter().map(Credit::balance).sum()
}

/// Number of credits carrying the given stored status.
pub fn count_with_status(credits: &[Credit], status: CreditStatus) -> usize {
    credits.iter().filter(|credit| credit.status == status).count()
}

/// Total principal granted, optionally scoped to one day.
pub fn total_granted(credits: &[Credit], day: Option<&DayStamp>) -> u64 {
    credits
        .iter()
        .filter(|credit| day.map_or(true, |day| &credit.date == day))
        .map(|credit| u64::from(credit.principal))
        .sum()
}
