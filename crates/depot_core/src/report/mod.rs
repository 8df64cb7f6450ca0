//! Aggregation engine: pure derivations over collection contents.
//!
//! # Responsibility
//! - Compute dashboard and per-module summary values from record slices.
//!
//! # Invariants
//! - Every function is pure: no mutation, no caching, no hidden state;
//!   calling twice on unchanged input yields identical output.
//! - Collections are small, so totals are recomputed on every read.

pub mod crates;
pub mod credits;
pub mod daily_sheet;
pub mod dashboard;
pub mod expenses;
pub mod margins;
pub mod partners;
pub mod purchases;
pub mod sales;
pub mod staff;
pub mod stock;
