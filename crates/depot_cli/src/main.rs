//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `depot_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use depot_core::db::open_db_in_memory;
use depot_core::Depot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("depot_core version={}", depot_core::core_version());

    let conn = open_db_in_memory()?;
    let depot = Depot::open(&conn)?;
    let summary = depot.dashboard();

    println!(
        "revenue={} critical_stock={} receivables={} expenses={} margin={}",
        summary.total_sales_revenue,
        summary.critical_stock_count,
        summary.outstanding_receivables,
        summary.total_expenses,
        summary.total_margin,
    );
    if let Some(product) = &summary.best_margin_product {
        println!("best_margin_product={product}");
    }
    println!(
        "crates_outstanding={} crates_must_return={}",
        summary.crates_outstanding, summary.crates_must_return
    );

    Ok(())
}
