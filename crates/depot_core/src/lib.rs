//! Core domain logic for the depot operations console.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod report;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::crate_line::{CrateLine, MUST_RETURN_THRESHOLD};
pub use model::credit::{Credit, CreditStatus};
pub use model::date::{DayStamp, DayStampError};
pub use model::expense::Expense;
pub use model::margin::MarginEntry;
pub use model::partner::{Partner, PartnerStatus};
pub use model::purchase::{PurchaseOrder, PurchaseStatus};
pub use model::record::{Record, RecordId, ValidationError};
pub use model::sale::SaleLine;
pub use model::staff::{StaffMember, StaffStatus};
pub use model::stock::StockItem;
pub use report::dashboard::DashboardSummary;
pub use service::depot::Depot;
pub use store::{CollectionName, CollectionStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
