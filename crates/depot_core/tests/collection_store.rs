use depot_core::db::{open_db, open_db_in_memory};
use depot_core::model::credit::{Credit, CreditStatus};
use depot_core::model::date::DayStamp;
use depot_core::{CollectionName, CollectionStore, RecordId, StoreError};
use rusqlite::Connection;

const TEST_CREDITS: CollectionName = CollectionName::new("test-credits");

fn credit(id: i64, client: &str, principal: u32, repaid: u32) -> Credit {
    Credit {
        id: RecordId::from_raw(id),
        client: client.to_string(),
        phone: "07 00 00 00".to_string(),
        principal,
        repaid,
        date: DayStamp::parse("2026-02-20").unwrap(),
        status: CreditStatus::InProgress,
    }
}

fn seed() -> Vec<Credit> {
    vec![
        credit(1, "Koné Amadou", 150_000, 50_000),
        credit(2, "Touré Fatou", 80_000, 80_000),
        credit(3, "Diallo Ibrahim", 320_000, 100_000),
    ]
}

fn raw_row(conn: &Connection, name: CollectionName) -> Option<String> {
    conn.query_row(
        "SELECT data FROM collections WHERE name = ?1;",
        [name.as_str()],
        |row| row.get(0),
    )
    .ok()
}

#[test]
fn open_uses_seed_without_writing_it_back() {
    let conn = open_db_in_memory().unwrap();
    let store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    assert_eq!(store.records(), seed().as_slice());
    assert!(raw_row(&conn, TEST_CREDITS).is_none());
}

#[test]
fn add_appends_persists_and_returns_updated_sequence() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    let updated = store.add(credit(4, "Bamba Sékou", 45_000, 0)).unwrap();
    assert_eq!(updated.len(), 4);
    assert_eq!(updated[3].client, "Bamba Sékou");

    // A fresh open with an empty seed must see the persisted sequence.
    let reloaded: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, TEST_CREDITS, Vec::new()).unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.records()[3].client, "Bamba Sékou");
}

#[test]
fn persistence_round_trip_across_file_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("depot.db");

    {
        let conn = open_db(&path).unwrap();
        let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();
        store.add(credit(4, "Bamba Sékou", 45_000, 0)).unwrap();
        store
            .update(credit(1, "Koné Amadou", 150_000, 150_000))
            .unwrap();
        store.remove(RecordId::from_raw(2)).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, TEST_CREDITS, Vec::new()).unwrap();

    let clients: Vec<&str> = store
        .records()
        .iter()
        .map(|record| record.client.as_str())
        .collect();
    assert_eq!(clients, ["Koné Amadou", "Diallo Ibrahim", "Bamba Sékou"]);
    assert_eq!(store.records()[0].repaid, 150_000);
}

#[test]
fn remove_at_shifts_subsequent_positions_down() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    let removed = store.remove_at(1).unwrap();
    assert_eq!(removed.client, "Touré Fatou");

    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].client, "Koné Amadou");
    assert_eq!(store.records()[1].client, "Diallo Ibrahim");
    assert_eq!(store.position_of(RecordId::from_raw(3)), Some(1));
}

#[test]
fn id_addressed_mutation_survives_prior_removals() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    // Shift everything by removing the head, then address by id.
    store.remove(RecordId::from_raw(1)).unwrap();
    store
        .update(credit(3, "Diallo Ibrahim", 320_000, 320_000))
        .unwrap();

    let updated = store.get(RecordId::from_raw(3)).unwrap();
    assert_eq!(updated.repaid, 320_000);
    assert_eq!(store.len(), 2);
}

#[test]
fn positional_ops_out_of_bounds_are_precondition_violations() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    let err = store.update_at(3, credit(9, "X Y", 1, 0)).unwrap_err();
    assert!(matches!(err, StoreError::OutOfBounds { position: 3, len: 3 }));

    let err = store.remove_at(7).unwrap_err();
    assert!(matches!(err, StoreError::OutOfBounds { position: 7, len: 3 }));

    // The sequence is untouched and nothing was persisted.
    assert_eq!(store.len(), 3);
    assert!(raw_row(&conn, TEST_CREDITS).is_none());
}

#[test]
fn update_with_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    let err = store.update(credit(99, "Inconnu", 1000, 0)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == RecordId::from_raw(99)));

    let err = store.remove(RecordId::from_raw(42)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == RecordId::from_raw(42)));
}

#[test]
fn validation_failure_blocks_the_write_and_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    let err = store.add(credit(4, "   ", 45_000, 0)).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store.update(credit(1, "", 150_000, 0)).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    assert_eq!(store.records(), seed().as_slice());
    assert!(raw_row(&conn, TEST_CREDITS).is_none());
}

#[test]
fn corrupt_persisted_value_recovers_to_seed_and_next_mutation_overwrites() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO collections (name, data, updated_at) VALUES (?1, ?2, 0);",
        [TEST_CREDITS.as_str(), "{not valid json"],
    )
    .unwrap();

    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();
    assert_eq!(store.records(), seed().as_slice());

    store.add(credit(4, "Bamba Sékou", 45_000, 0)).unwrap();

    let reloaded: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, TEST_CREDITS, Vec::new()).unwrap();
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn reset_to_seed_discards_mutations_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let mut store = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();

    store.add(credit(4, "Bamba Sékou", 45_000, 0)).unwrap();
    store.remove(RecordId::from_raw(1)).unwrap();

    let records = store.reset_to_seed().unwrap();
    assert_eq!(records, seed().as_slice());

    let reloaded: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, TEST_CREDITS, Vec::new()).unwrap();
    assert_eq!(reloaded.records(), seed().as_slice());
}

#[test]
fn independent_namespaces_do_not_interfere() {
    let conn = open_db_in_memory().unwrap();
    let other: CollectionName = CollectionName::new("test-credits-bis");

    let mut first = CollectionStore::open(&conn, TEST_CREDITS, seed()).unwrap();
    let mut second: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, other, Vec::new()).unwrap();

    first.add(credit(4, "Bamba Sékou", 45_000, 0)).unwrap();
    second.add(credit(100, "Ouattara Marie", 200_000, 0)).unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 1);

    let reloaded: CollectionStore<'_, Credit> =
        CollectionStore::open(&conn, other, Vec::new()).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].client, "Ouattara Marie");
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = CollectionStore::<Credit>::open(&conn, TEST_CREDITS, seed());
    match result {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_required_collections_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();

    let result = CollectionStore::<Credit>::open(&conn, TEST_CREDITS, seed());
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("collections"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE collections (
            name TEXT PRIMARY KEY NOT NULL,
            data TEXT NOT NULL
        );
        PRAGMA user_version = 1;",
    )
    .unwrap();

    let result = CollectionStore::<Credit>::open(&conn, TEST_CREDITS, seed());
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "collections",
            column: "updated_at"
        })
    ));
}
