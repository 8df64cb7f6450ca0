//! Core use-case services.
//!
//! # Responsibility
//! - Wire the nine collection stores into one console facade.
//! - Keep callers decoupled from storage details.

pub mod depot;
