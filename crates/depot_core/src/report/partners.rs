//! Partner / tax obligation summaries.

use crate::model::partner::{Partner, PartnerStatus};

/// Amount still owed: Σ amounts of obligations with status `due`.
pub fn total_due(partners: &[Partner]) -> u64 {
    partners
        .iter()
        .filter(|partner| partner.status == PartnerStatus::Due)
        .map(|partner| u64::from(partner.amount))
        .sum()
}

/// Number of obligations carrying the given status.
pub fn count_with_status(partners: &[Partner], status: PartnerStatus) -> usize {
    partners
        .iter()
        .filter(|partner| partner.status == status)
        .count()
}
