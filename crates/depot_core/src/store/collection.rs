//! Generic persisted collection store.
//!
//! # Responsibility
//! - Give one named collection durable CRUD with an in-memory mirror.
//! - Persist the complete current sequence on every mutation.
//!
//! # Invariants
//! - Opening never writes: the seed is only persisted by the first
//!   mutation that follows it.
//! - An unreadable persisted value is recovered by seed substitution,
//!   never surfaced to the caller.
//! - Mutations validate, persist the new sequence, then swap the mirror;
//!   a failed persist leaves mirror and stored value untouched.

use log::{info, warn};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::migrations::latest_version;
use crate::model::record::{Record, RecordId};
use crate::store::{CollectionName, StoreError, StoreResult};

/// Durable store for one module collection.
///
/// Collections are small (tens of records); every mutation re-encodes and
/// persists the full sequence rather than patching deltas.
pub struct CollectionStore<'conn, T> {
    conn: &'conn Connection,
    name: CollectionName,
    seed: Vec<T>,
    records: Vec<T>,
}

impl<'conn, T> CollectionStore<'conn, T>
where
    T: Record + Serialize + DeserializeOwned + Clone,
{
    /// Opens the collection `name`, loading its persisted records.
    ///
    /// Falls back to `seed` when nothing is persisted or the persisted
    /// value fails to decode; the seed is NOT written back until the next
    /// mutation.
    pub fn open(
        conn: &'conn Connection,
        name: CollectionName,
        seed: Vec<T>,
    ) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;

        let records = match load_raw(conn, name)? {
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(records) => {
                    info!(
                        "event=collection_open module=store status=ok name={name} records={}",
                        records.len()
                    );
                    records
                }
                Err(err) => {
                    warn!(
                        "event=collection_open module=store status=recovered name={name} error={err}"
                    );
                    seed.clone()
                }
            },
            None => {
                info!(
                    "event=collection_open module=store status=seeded name={name} records={}",
                    seed.len()
                );
                seed.clone()
            }
        };

        Ok(Self {
            conn,
            name,
            seed,
            records,
        })
    }

    pub fn name(&self) -> CollectionName {
        self.name
    }

    /// Current in-memory sequence, in authoritative order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record carrying `id`, if any.
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Position of the first record carrying `id` in the authoritative
    /// sequence. Callers holding a filtered or sorted view must go through
    /// this before any positional mutation.
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Appends `record` and persists. Returns the updated sequence.
    ///
    /// The record id is taken as supplied; no uniqueness check is made.
    pub fn add(&mut self, record: T) -> StoreResult<&[T]> {
        record.validate()?;

        let mut updated = self.records.clone();
        updated.push(record);
        self.persist(&updated)?;
        self.records = updated;
        Ok(&self.records)
    }

    /// Replaces the record whose id matches `record.id()` and persists.
    ///
    /// The id addresses the record, so an update can never re-identify it.
    pub fn update(&mut self, record: T) -> StoreResult<()> {
        record.validate()?;

        let position = self
            .position_of(record.id())
            .ok_or(StoreError::NotFound(record.id()))?;

        let mut updated = self.records.clone();
        updated[position] = record;
        self.persist(&updated)?;
        self.records = updated;
        Ok(())
    }

    /// Removes the record carrying `id` and persists. Returns the removed
    /// record; positions after it shift down by one.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<T> {
        let position = self.position_of(id).ok_or(StoreError::NotFound(id))?;
        self.remove_at(position)
    }

    /// Replaces the element at `position` and persists.
    ///
    /// An out-of-range position is a precondition violation, never a
    /// silent no-op.
    pub fn update_at(&mut self, position: usize, record: T) -> StoreResult<()> {
        self.check_position(position)?;
        record.validate()?;

        let mut updated = self.records.clone();
        updated[position] = record;
        self.persist(&updated)?;
        self.records = updated;
        Ok(())
    }

    /// Removes the element at `position` and persists. Returns the removed
    /// record; subsequent positions shift down by one.
    pub fn remove_at(&mut self, position: usize) -> StoreResult<T> {
        self.check_position(position)?;

        let mut updated = self.records.clone();
        let removed = updated.remove(position);
        self.persist(&updated)?;
        self.records = updated;
        Ok(removed)
    }

    /// Replaces the sequence with the original seed and persists,
    /// discarding all prior mutations.
    pub fn reset_to_seed(&mut self) -> StoreResult<&[T]> {
        let seed = self.seed.clone();
        self.persist(&seed)?;
        self.records = seed;
        info!(
            "event=collection_reset module=store status=ok name={} records={}",
            self.name,
            self.records.len()
        );
        Ok(&self.records)
    }

    fn check_position(&self, position: usize) -> StoreResult<()> {
        if position >= self.records.len() {
            return Err(StoreError::OutOfBounds {
                position,
                len: self.records.len(),
            });
        }
        Ok(())
    }

    fn persist(&self, records: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(records).map_err(StoreError::Encode)?;
        self.conn.execute(
            "INSERT INTO collections (name, data, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(name) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at;",
            params![self.name.as_str(), payload],
        )?;
        Ok(())
    }
}

fn load_raw(conn: &Connection, name: CollectionName) -> StoreResult<Option<String>> {
    let mut stmt = conn.prepare("SELECT data FROM collections WHERE name = ?1;")?;
    let mut rows = stmt.query([name.as_str()])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(row.get(0)?));
    }
    Ok(None)
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let actual_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let expected_version = latest_version();
    if actual_version == 0 {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "collections")? {
        return Err(StoreError::MissingRequiredTable("collections"));
    }

    for column in ["name", "data", "updated_at"] {
        if !table_has_column(conn, "collections", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "collections",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
