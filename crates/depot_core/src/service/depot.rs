//! Depot console facade.
//!
//! # Responsibility
//! - Open all nine module collections over one connection, each with its
//!   namespace key and seed passed explicitly.
//! - Expose typed collection accessors and the cross-collection reads.
//!
//! # Invariants
//! - Collection lifecycles stay independent: no operation touches more
//!   than one collection's persisted namespace.

use rusqlite::Connection;

use crate::model::crate_line::CrateLine;
use crate::model::credit::Credit;
use crate::model::date::DayStamp;
use crate::model::expense::Expense;
use crate::model::margin::MarginEntry;
use crate::model::partner::Partner;
use crate::model::purchase::PurchaseOrder;
use crate::model::sale::SaleLine;
use crate::model::staff::StaffMember;
use crate::model::stock::StockItem;
use crate::report::daily_sheet::{financial_recap, FinancialRecap};
use crate::report::dashboard::{self, DashboardSummary};
use crate::seed;
use crate::store::{CollectionName, CollectionStore, StoreResult};

pub const STOCKS: CollectionName = CollectionName::new("depot-stocks");
pub const SALES: CollectionName = CollectionName::new("depot-ventes");
pub const MARGINS: CollectionName = CollectionName::new("depot-marges");
pub const CREDITS: CollectionName = CollectionName::new("depot-credits");
pub const EXPENSES: CollectionName = CollectionName::new("depot-depenses");
pub const PURCHASES: CollectionName = CollectionName::new("depot-achats");
pub const CRATES: CollectionName = CollectionName::new("depot-casiers");
pub const STAFF: CollectionName = CollectionName::new("depot-personnel");
pub const PARTNERS: CollectionName = CollectionName::new("depot-partenaires");

/// The whole console: one store per business domain, one shared
/// connection.
pub struct Depot<'conn> {
    stocks: CollectionStore<'conn, StockItem>,
    sales: CollectionStore<'conn, SaleLine>,
    margins: CollectionStore<'conn, MarginEntry>,
    credits: CollectionStore<'conn, Credit>,
    expenses: CollectionStore<'conn, Expense>,
    purchases: CollectionStore<'conn, PurchaseOrder>,
    crates: CollectionStore<'conn, CrateLine>,
    staff: CollectionStore<'conn, StaffMember>,
    partners: CollectionStore<'conn, Partner>,
}

impl<'conn> Depot<'conn> {
    /// Opens the nine collections with the default seed sets.
    pub fn open(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            stocks: CollectionStore::open(conn, STOCKS, seed::stock_items())?,
            sales: CollectionStore::open(conn, SALES, seed::sale_lines())?,
            margins: CollectionStore::open(conn, MARGINS, seed::margin_entries())?,
            credits: CollectionStore::open(conn, CREDITS, seed::credits())?,
            expenses: CollectionStore::open(conn, EXPENSES, seed::expenses())?,
            purchases: CollectionStore::open(conn, PURCHASES, seed::purchase_orders())?,
            crates: CollectionStore::open(conn, CRATES, seed::crate_lines())?,
            staff: CollectionStore::open(conn, STAFF, seed::staff_members())?,
            partners: CollectionStore::open(conn, PARTNERS, seed::partners())?,
        })
    }

    pub fn stocks(&self) -> &CollectionStore<'conn, StockItem> {
        &self.stocks
    }

    pub fn stocks_mut(&mut self) -> &mut CollectionStore<'conn, StockItem> {
        &mut self.stocks
    }

    pub fn sales(&self) -> &CollectionStore<'conn, SaleLine> {
        &self.sales
    }

    pub fn sales_mut(&mut self) -> &mut CollectionStore<'conn, SaleLine> {
        &mut self.sales
    }

    pub fn margins(&self) -> &CollectionStore<'conn, MarginEntry> {
        &self.margins
    }

    pub fn margins_mut(&mut self) -> &mut CollectionStore<'conn, MarginEntry> {
        &mut self.margins
    }

    pub fn credits(&self) -> &CollectionStore<'conn, Credit> {
        &self.credits
    }

    pub fn credits_mut(&mut self) -> &mut CollectionStore<'conn, Credit> {
        &mut self.credits
    }

    pub fn expenses(&self) -> &CollectionStore<'conn, Expense> {
        &self.expenses
    }

    pub fn expenses_mut(&mut self) -> &mut CollectionStore<'conn, Expense> {
        &mut self.expenses
    }

    pub fn purchases(&self) -> &CollectionStore<'conn, PurchaseOrder> {
        &self.purchases
    }

    pub fn purchases_mut(&mut self) -> &mut CollectionStore<'conn, PurchaseOrder> {
        &mut self.purchases
    }

    pub fn crates(&self) -> &CollectionStore<'conn, CrateLine> {
        &self.crates
    }

    pub fn crates_mut(&mut self) -> &mut CollectionStore<'conn, CrateLine> {
        &mut self.crates
    }

    pub fn staff(&self) -> &CollectionStore<'conn, StaffMember> {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut CollectionStore<'conn, StaffMember> {
        &mut self.staff
    }

    pub fn partners(&self) -> &CollectionStore<'conn, Partner> {
        &self.partners
    }

    pub fn partners_mut(&mut self) -> &mut CollectionStore<'conn, Partner> {
        &mut self.partners
    }

    /// Headline dashboard figures, recomputed from current contents.
    pub fn dashboard(&self) -> DashboardSummary {
        dashboard::summary(
            self.stocks.records(),
            self.sales.records(),
            self.margins.records(),
            self.credits.records(),
            self.expenses.records(),
            self.crates.records(),
        )
    }

    /// Financial recap of the daily sheet; `day` scopes the date-bearing
    /// collections.
    pub fn daily_recap(&self, savings: u64, day: Option<&DayStamp>) -> FinancialRecap {
        financial_recap(
            self.sales.records(),
            self.purchases.records(),
            self.expenses.records(),
            self.credits.records(),
            savings,
            day,
        )
    }
}
