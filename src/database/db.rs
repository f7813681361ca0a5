//! SQLite-backed blob store
//!
//! Persists serialized review data in a single key/value table, next to the
//! simulated "current date" used to fast-forward the review schedule.

use crate::clock::Clock;
use crate::error::Result;
use crate::store::BlobStore;
use chrono::{DateTime, Duration, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

const CURRENT_DATE_KEY: &str = "current_date";

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and its tables.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;
        Ok(Self { conn })
    }

    /// Returns the simulated current date, seeding it from `clock` on first use.
    pub fn current_date(&self, clock: &impl Clock) -> Result<DateTime<Utc>> {
        let seed = clock.now();
        self.conn.execute(
            "INSERT OR IGNORE INTO app_state (key, value) VALUES (?1, ?2)",
            params![CURRENT_DATE_KEY, seed.timestamp().to_string()],
        )?;

        let timestamp: String = self.conn.query_row(
            "SELECT value FROM app_state WHERE key = ?1",
            params![CURRENT_DATE_KEY],
            |row| row.get(0),
        )?;

        let date = timestamp
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        match date {
            Some(date) => Ok(date),
            None => {
                tracing::warn!(value = %timestamp, "stored current date is invalid, resetting");
                self.set_current_date(seed)?;
                Ok(seed)
            }
        }
    }

    /// Advances the simulated date by 24 hours and returns the new date.
    pub fn advance_day(&self, clock: &impl Clock) -> Result<DateTime<Utc>> {
        let next_day = self.current_date(clock)? + Duration::days(1);
        self.set_current_date(next_day)?;
        tracing::info!(date = %next_day, "advanced simulated date");
        Ok(next_day)
    }

    fn set_current_date(&self, date: DateTime<Utc>) -> Result<()> {
        self.put(CURRENT_DATE_KEY, &date.timestamp().to_string())
    }
}

impl BlobStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
