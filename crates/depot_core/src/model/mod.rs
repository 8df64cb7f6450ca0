//! Domain records for the nine depot collections.
//!
//! # Responsibility
//! - Define the flat record shape of each module collection.
//! - Keep per-record derived values (closing quantity, balances, margins)
//!   next to the data they derive from.
//!
//! # Invariants
//! - Every record carries a stable `RecordId` assigned at creation.
//! - Stored quantity and money fields are non-negative integers; derived
//!   values that can go negative under inconsistent data are signed.

pub mod crate_line;
pub mod credit;
pub mod date;
pub mod expense;
pub mod margin;
pub mod partner;
pub mod purchase;
pub mod record;
pub mod sale;
pub mod staff;
pub mod stock;
