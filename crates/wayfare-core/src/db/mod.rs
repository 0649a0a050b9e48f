//! SQLite storage backing the local trip server.
//!
//! This module provides the low-level database operations for the local
//! collaborator implementation: connection handling, schema management, and
//! specialized query interfaces for trips, activities, and detail records.

use std::path::Path;
use std::str::FromStr;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

mod activity_queries;
mod detail_queries;
mod trip_queries;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS trips (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    destination TEXT NOT NULL,
    starts_at TEXT NOT NULL,
    ends_at TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    trip_id INTEGER NOT NULL REFERENCES trips(id),
    title TEXT NOT NULL,
    occurs_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    trip_id INTEGER NOT NULL REFERENCES trips(id),
    title TEXT NOT NULL,
    url TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS participants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    trip_id INTEGER NOT NULL REFERENCES trips(id),
    name TEXT,
    email TEXT NOT NULL,
    is_confirmed INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS current_trip (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    trip_id INTEGER NOT NULL
);
";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize schema")
    }
}

/// Parses a TEXT column into a jiff value, mapping parse failures onto
/// rusqlite's column conversion error so row mappers can use `?` directly.
pub(crate) fn parse_text_column<T>(index: usize, text: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = jiff::Error>,
{
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
    })
}
