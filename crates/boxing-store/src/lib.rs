//! Boxing Storage Layer
//!
//! Implements the `BoxerRepository` trait on top of SQLite.
//!
//! # Architecture
//!
//! - One `boxers` table holding attributes plus the fight record
//! - Schema applied idempotently when a store is opened
//! - The connection is owned by the store and closed when it is dropped
//!
//! # Examples
//!
//! ```
//! use boxing_domain::traits::BoxerRepository;
//! use boxing_domain::NewBoxer;
//! use boxing_store::SqliteStore;
//!
//! let mut store = SqliteStore::new(":memory:").unwrap();
//! let id = store.insert(&NewBoxer::new("Ali", 210, 75, 78.0, 30)).unwrap();
//! assert!(store.find_by_id(id).unwrap().is_some());
//! ```

#![warn(missing_docs)]

pub mod config;

pub use config::StoreConfig;

use boxing_domain::traits::BoxerRepository;
use boxing_domain::{Boxer, BoxerId, BoxerRecord, BoxingError, LeaderboardSort, NewBoxer, Outcome};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Boxer not found
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid data format or configuration
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A boxer with this name already exists
    #[error("Boxer with name '{0}' already exists")]
    Duplicate(String),
}

impl From<StoreError> for BoxingError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(what) => BoxingError::NotFound(what),
            StoreError::Duplicate(name) => BoxingError::AlreadyExists(name),
            other => BoxingError::Storage(other.to_string()),
        }
    }
}

const SELECT_BOXER: &str =
    "SELECT id, name, weight, height, reach, age, fights, wins FROM boxers";

/// SQLite-based implementation of BoxerRepository
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        tracing::info!("Database connection has been established: {}", path.as_ref().display());
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open the store described by `config`
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::InvalidData)?;
        Self::new(&config.path)
    }

    /// Open a fresh in-memory store
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Check that the database answers a trivial query
    pub fn health_check(&self) -> Result<(), StoreError> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| {
                tracing::error!("Database connection error: {}", e);
                StoreError::from(e)
            })?;
        tracing::info!("Database connection successful.");
        Ok(())
    }

    /// Check whether a table exists
    pub fn table_exists(&self, table: &str) -> Result<bool, StoreError> {
        let found = self
            .conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);

        if !found {
            tracing::warn!("Table '{}' does not exist.", table);
        }
        Ok(found)
    }

    /// Number of boxers stored
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM boxers", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn find_one(&self, filter: &str, param: &dyn rusqlite::ToSql) -> Result<Option<BoxerRecord>, StoreError> {
        let sql = format!("{} WHERE {} = ?1", SELECT_BOXER, filter);
        let record = self
            .conn
            .query_row(&sql, params![param], Self::row_to_record)
            .optional()?;
        Ok(record)
    }

    /// Convert a `boxers` row into a record, re-deriving the weight class
    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<BoxerRecord> {
        let boxer = Boxer::from_parts(
            BoxerId::from_value(row.get(0)?),
            row.get::<_, String>(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        )
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Integer, Box::new(e))
        })?;

        Ok(BoxerRecord {
            boxer,
            fights: row.get(6)?,
            wins: row.get(7)?,
        })
    }

    fn is_unique_violation(e: &rusqlite::Error) -> bool {
        matches!(
            e,
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == ErrorCode::ConstraintViolation
                    && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

impl BoxerRepository for SqliteStore {
    type Error = StoreError;

    fn insert(&mut self, boxer: &NewBoxer) -> Result<BoxerId, Self::Error> {
        if self.find_by_name(&boxer.name)?.is_some() {
            tracing::warn!("Boxer with name '{}' already exists", boxer.name);
            return Err(StoreError::Duplicate(boxer.name.clone()));
        }

        tracing::info!("Inserting new boxer");
        let inserted = self.conn.execute(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![&boxer.name, boxer.weight, boxer.height, boxer.reach, boxer.age],
        );

        match inserted {
            Ok(_) => Ok(BoxerId::from_value(self.conn.last_insert_rowid())),
            // Another writer took the name between the check and the insert
            Err(e) if Self::is_unique_violation(&e) => Err(StoreError::Duplicate(boxer.name.clone())),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, id: BoxerId) -> Result<(), Self::Error> {
        let deleted = self
            .conn
            .execute("DELETE FROM boxers WHERE id = ?1", params![id.value()])?;

        if deleted == 0 {
            tracing::warn!("Boxer with ID {} not found.", id);
            return Err(StoreError::NotFound(format!("Boxer with ID {}", id)));
        }
        Ok(())
    }

    fn find_by_id(&self, id: BoxerId) -> Result<Option<BoxerRecord>, Self::Error> {
        self.find_one("id", &id.value())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<BoxerRecord>, Self::Error> {
        self.find_one("name", &name)
    }

    fn apply_result(&mut self, id: BoxerId, outcome: Outcome) -> Result<(), Self::Error> {
        let sql = match outcome {
            Outcome::Win => "UPDATE boxers SET fights = fights + 1, wins = wins + 1 WHERE id = ?1",
            Outcome::Loss => "UPDATE boxers SET fights = fights + 1 WHERE id = ?1",
        };

        let updated = self.conn.execute(sql, params![id.value()])?;
        if updated == 0 {
            return Err(StoreError::NotFound(format!("Boxer with ID {}", id)));
        }
        Ok(())
    }

    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<BoxerRecord>, Self::Error> {
        let order = match sort {
            LeaderboardSort::Wins => "wins DESC",
            LeaderboardSort::WinPct => "(wins * 1.0 / fights) DESC",
        };
        let sql = format!("{} WHERE fights > 0 ORDER BY {}, id ASC", SELECT_BOXER, order);

        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
