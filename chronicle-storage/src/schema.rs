//! Table definitions for the chronicle store.
//!
//! Population is owned by the external import collaborator; this
//! module exists so the storage contract is testable against a real
//! database.

use rusqlite::Connection;

use chronicle_core::errors::ChronicleResult;

use crate::to_storage_err;

/// Create all tables and indexes if they do not exist.
pub fn create_schema(conn: &Connection) -> ChronicleResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS rulers (
            ruler_id       INTEGER PRIMARY KEY,
            name           TEXT NOT NULL,
            personal_name  TEXT,
            epithet        TEXT,
            biography      TEXT,
            reference_link TEXT,
            notes          TEXT
        );

        CREATE TABLE IF NOT EXISTS titles (
            title_id   INTEGER PRIMARY KEY,
            name       TEXT NOT NULL UNIQUE,
            plural     TEXT,
            max_count  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS periods (
            period_id  INTEGER PRIMARY KEY,
            ruler_id   INTEGER NOT NULL REFERENCES rulers(ruler_id),
            title_id   INTEGER NOT NULL REFERENCES titles(title_id),
            label      TEXT NOT NULL,
            position   INTEGER NOT NULL,
            start_year INTEGER NOT NULL,
            end_year   INTEGER NOT NULL,
            notes      TEXT,
            CHECK (start_year <= end_year)
        );

        CREATE TABLE IF NOT EXISTS events (
            event_id       INTEGER PRIMARY KEY,
            name           TEXT NOT NULL,
            start_year     INTEGER NOT NULL,
            end_year       INTEGER NOT NULL,
            notes          TEXT,
            reference_link TEXT,
            CHECK (start_year <= end_year)
        );

        CREATE TABLE IF NOT EXISTS year_index (
            year      INTEGER NOT NULL,
            period_id INTEGER REFERENCES periods(period_id),
            event_id  INTEGER REFERENCES events(event_id)
        );

        CREATE INDEX IF NOT EXISTS idx_year_index_year   ON year_index(year);
        CREATE INDEX IF NOT EXISTS idx_year_index_period ON year_index(period_id);
        CREATE INDEX IF NOT EXISTS idx_year_index_event  ON year_index(event_id);
        CREATE INDEX IF NOT EXISTS idx_periods_title     ON periods(title_id, position);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
