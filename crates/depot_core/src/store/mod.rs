//! Record store: durable CRUD over one named collection of records.
//!
//! # Responsibility
//! - Define the store error taxonomy and the collection namespace key.
//! - Isolate SQLite and JSON encoding details from service orchestration.
//!
//! # Invariants
//! - Store writes must pass `Record::validate()` before any persistence
//!   side effect.
//! - A mutation either fully persists the new sequence or leaves the
//!   prior persisted sequence authoritative.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;
use crate::model::record::{RecordId, ValidationError};

pub mod collection;

pub use collection::CollectionStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Stable namespace key for one persisted module collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionName(&'static str);

impl CollectionName {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for CollectionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Store error for collection persistence and mutation operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Db(DbError),
    /// The new sequence could not be serialized for persistence.
    Encode(serde_json::Error),
    /// No record with the addressed id exists in the collection.
    NotFound(RecordId),
    /// A positional operation addressed a slot beyond the sequence end.
    OutOfBounds { position: usize, len: usize },
    /// The connection has no applied migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::OutOfBounds { position, len } => {
                write!(f, "position {position} is out of bounds for length {len}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: user_version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
