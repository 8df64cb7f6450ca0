//! Default seed sets for the nine module collections.
//!
//! # Responsibility
//! - Provide the first-run contents of each collection as owned values.
//!
//! # Invariants
//! - Seeds are handed to each store at open time; nothing in the store
//!   layer reads these functions on its own.
//! - Seed ids are small fixed values; live records get creation-time ids.

use crate::model::crate_line::CrateLine;
use crate::model::credit::{Credit, CreditStatus};
use crate::model::date::DayStamp;
use crate::model::expense::Expense;
use crate::model::margin::MarginEntry;
use crate::model::partner::{Partner, PartnerStatus};
use crate::model::purchase::{PurchaseOrder, PurchaseStatus};
use crate::model::record::RecordId;
use crate::model::sale::SaleLine;
use crate::model::staff::{StaffMember, StaffStatus};
use crate::model::stock::StockItem;

fn day(value: &str) -> DayStamp {
    DayStamp::parse(value).expect("valid seed day")
}

pub fn stock_items() -> Vec<StockItem> {
    let item = |id, name: &str, supplier: &str, category: &str, opening, received, issued, unit_price, threshold| StockItem {
        id: RecordId::from_raw(id),
        name: name.to_string(),
        supplier: supplier.to_string(),
        category: category.to_string(),
        opening,
        received,
        issued,
        unit_price,
        threshold,
    };
    vec![
        item(1, "Bock 66", "SOLIBRA", "Bières", 120, 48, 65, 3000, 30),
        item(2, "Castel 33", "SOLIBRA", "Bières", 200, 0, 85, 2500, 50),
        item(3, "Beaufort 50", "SOLIBRA", "Bières", 80, 24, 42, 3500, 20),
        item(4, "Heineken 33", "BRASSIVOIRE", "Bières", 24, 0, 12, 4000, 24),
        item(5, "Coca 33", "COCACOLA", "Soft Drinks", 96, 48, 60, 1500, 30),
        item(6, "Coca 50", "COCACOLA", "Soft Drinks", 20, 0, 12, 2000, 20),
        item(7, "Orangina 33", "SOLIBRA", "Sucreries", 48, 24, 30, 1800, 15),
        item(8, "Vin 50", "SOLIBRA", "Vins", 36, 12, 20, 2500, 10),
        item(9, "Ivoire Black", "BRASSIVOIRE", "Bières", 60, 0, 25, 3000, 20),
        item(10, "Pack d'eau", "Autres", "Divers", 50, 20, 35, 2500, 15),
    ]
}

pub fn sale_lines() -> Vec<SaleLine> {
    let line = |id, product: &str, opening, received, sold, unit_price| SaleLine {
        id: RecordId::from_raw(id),
        product: product.to_string(),
        opening,
        received,
        sold,
        unit_price,
    };
    vec![
        line(1, "Bock 66", 120, 48, 65, 3000),
        line(2, "Castel 33", 200, 0, 85, 2500),
        line(3, "Beaufort 50", 80, 24, 42, 3500),
        line(4, "Heineken 33", 24, 0, 12, 4000),
        line(5, "Coca 33", 96, 48, 60, 1500),
        line(6, "Orangina 33", 48, 24, 30, 1800),
        line(7, "Vin 50", 36, 12, 20, 2500),
        line(8, "Ivoire Black", 60, 0, 25, 3000),
        line(9, "Pack d'eau", 50, 20, 35, 2500),
    ]
}

pub fn margin_entries() -> Vec<MarginEntry> {
    let entry = |id, product: &str, purchase_price, sale_price, quantity_sold| MarginEntry {
        id: RecordId::from_raw(id),
        product: product.to_string(),
        purchase_price,
        sale_price,
        quantity_sold,
    };
    vec![
        entry(1, "Bock 66", 2200, 3000, 65),
        entry(2, "Castel 33", 1800, 2500, 85),
        entry(3, "Beaufort 50", 2500, 3500, 42),
        entry(4, "Heineken 33", 3200, 4000, 12),
        entry(5, "Coca 33", 1000, 1500, 60),
        entry(6, "Orangina 33", 1200, 1800, 30),
        entry(7, "Vin 50", 1800, 2500, 20),
        entry(8, "Ivoire Black", 2200, 3000, 25),
    ]
}

pub fn credits() -> Vec<Credit> {
    let credit = |id, client: &str, phone: &str, principal, repaid, date: &str, status| Credit {
        id: RecordId::from_raw(id),
        client: client.to_string(),
        phone: phone.to_string(),
        principal,
        repaid,
        date: day(date),
        status,
    };
    vec![
        credit(1, "Koné Amadou", "07 12 34 56", 150_000, 50_000, "2026-02-20", CreditStatus::InProgress),
        credit(2, "Touré Fatou", "05 98 76 54", 80_000, 80_000, "2026-02-19", CreditStatus::Settled),
        credit(3, "Diallo Ibrahim", "01 23 45 67", 320_000, 100_000, "2026-02-18", CreditStatus::InProgress),
        credit(4, "Bamba Sékou", "07 65 43 21", 45_000, 0, "2026-02-17", CreditStatus::Overdue),
        credit(5, "Ouattara Marie", "05 11 22 33", 200_000, 200_000, "2026-02-15", CreditStatus::Settled),
        credit(6, "Coulibaly Drissa", "07 44 55 66", 175_000, 75_000, "2026-02-14", CreditStatus::InProgress),
        credit(7, "Yao Jean", "01 77 88 99", 280_000, 0, "2026-02-10", CreditStatus::Overdue),
    ]
}

pub fn expenses() -> Vec<Expense> {
    let expense = |id, description: &str, category: &str, amount, date: &str| Expense {
        id: RecordId::from_raw(id),
        description: description.to_string(),
        category: category.to_string(),
        amount,
        date: day(date),
    };
    vec![
        expense(1, "Transport marchandises SOMODIS", "Transport", 35_000, "2026-02-22"),
        expense(2, "Réparation réfrigérateur", "Maintenance", 75_000, "2026-02-22"),
        expense(3, "Frais de déchargement", "Transport", 15_000, "2026-02-22"),
        expense(4, "Achat sacs plastiques", "Divers", 5_000, "2026-02-21"),
        expense(5, "Électricité bureau", "Charges", 45_000, "2026-02-21"),
        expense(6, "Salaire journalier aide", "Salaires", 10_000, "2026-02-21"),
        expense(7, "Entretien local", "Maintenance", 25_000, "2026-02-20"),
        expense(8, "Carburant livraison", "Transport", 20_000, "2026-02-20"),
    ]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    let order = |id, reference: &str, supplier: &str, depot: &str, products: &str, amount, date: &str, status| PurchaseOrder {
        id: RecordId::from_raw(id),
        reference: reference.to_string(),
        supplier: supplier.to_string(),
        depot: depot.to_string(),
        products: products.to_string(),
        amount,
        date: day(date),
        status,
    };
    vec![
        order(1, "ACH-2026-00012", "SOLIBRA", "SOMODIS", "Bock 66 x48, Castel 33 x96", 345_600, "2026-02-22", PurchaseStatus::Received),
        order(2, "ACH-2026-00011", "BRASSIVOIRE", "PIEUVRE", "Ivoire Black x24, Despe x24", 168_000, "2026-02-21", PurchaseStatus::Received),
        order(3, "ACH-2026-00010", "COCACOLA", "COCACOLA", "Coca 33 x48, Coca 50 x24", 120_000, "2026-02-21", PurchaseStatus::Pending),
        order(4, "ACH-2026-00009", "SOLIBRA", "CTOP", "Beaufort 50 x24, Vin 50 x12", 105_600, "2026-02-20", PurchaseStatus::Received),
        order(5, "ACH-2026-00008", "Autres", "LOOKNAN", "Guiness 33 x24, Budweiser x12", 96_000, "2026-02-19", PurchaseStatus::Received),
    ]
}

pub fn crate_lines() -> Vec<CrateLine> {
    let line = |id, supplier: &str, crate_type: &str, received, returned, available, full, empty| CrateLine {
        id: RecordId::from_raw(id),
        supplier: supplier.to_string(),
        crate_type: crate_type.to_string(),
        received,
        returned,
        available,
        full,
        empty,
    };
    vec![
        line(1, "SOLIBRA", "33cl (24 trous)", 120, 95, 25, 18, 7),
        line(2, "SOLIBRA", "50cl (12 trous)", 80, 65, 15, 10, 5),
        line(3, "SOLIBRA", "50cl (20 trous)", 50, 42, 8, 5, 3),
        line(4, "SOLIBRA", "100cl (12 trous)", 30, 28, 2, 1, 1),
        line(5, "BRASSIVOIRE", "33cl (24 trous)", 60, 50, 10, 6, 4),
        line(6, "BRASSIVOIRE", "50cl (20 trous)", 40, 35, 5, 3, 2),
        line(7, "COCACOLA", "33cl (24 trous)", 45, 40, 5, 3, 2),
    ]
}

pub fn staff_members() -> Vec<StaffMember> {
    let member = |id, name: &str, role: &str, phone: &str, salary, advance, status| StaffMember {
        id: RecordId::from_raw(id),
        name: name.to_string(),
        role: role.to_string(),
        phone: phone.to_string(),
        salary,
        advance,
        status,
    };
    vec![
        member(1, "Konan Yao", "Caissier", "07 11 22 33", 120_000, 30_000, StaffStatus::Active),
        member(2, "Traoré Issa", "Livreur", "05 44 55 66", 100_000, 0, StaffStatus::Active),
        member(3, "N'Guessan Aya", "Vendeuse", "01 77 88 99", 95_000, 15_000, StaffStatus::Active),
        member(4, "Kouamé Serge", "Magasinier", "07 22 33 44", 110_000, 0, StaffStatus::Active),
        member(5, "Diomandé Ali", "Aide", "05 66 77 88", 75_000, 20_000, StaffStatus::OnLeave),
    ]
}

pub fn partners() -> Vec<Partner> {
    let partner = |id, name: &str, category: &str, amount, due_date: &str, status| Partner {
        id: RecordId::from_raw(id),
        name: name.to_string(),
        category: category.to_string(),
        amount,
        due_date: day(due_date),
        status,
    };
    vec![
        partner(1, "Direction Générale des Impôts", "Impôts", 350_000, "2026-03-15", PartnerStatus::Due),
        partner(2, "CNPS (Cotisations)", "Taxes Sociales", 180_000, "2026-02-28", PartnerStatus::Due),
        partner(3, "Mairie - Patente", "Patente", 250_000, "2026-01-31", PartnerStatus::Paid),
        partner(4, "TVA Mensuelle", "TVA", 420_000, "2026-03-10", PartnerStatus::Due),
        partner(5, "Taxe Communale", "Taxes Locales", 75_000, "2026-02-15", PartnerStatus::Paid),
    ]
}
