//! StoreEngine: owns the connection and implements the HistoryStore
//! contract, read-only on the query path.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use chronicle_core::errors::{ChronicleError, ChronicleResult, StorageError};
use chronicle_core::models::{EventHit, PeriodHit, YearMatch};
use chronicle_core::traits::HistoryStore;

use crate::{pragmas, queries, schema};

/// A view over the chronicle store. One invocation opens it, runs its
/// lookups, and drops it; nothing is cached across invocations.
pub struct StoreEngine {
    conn: Connection,
}

impl StoreEngine {
    /// Open the store file read-only. A missing or unreadable file is
    /// fatal to the invocation; the caller emits a diagnostic item.
    pub fn open(path: &Path) -> ChronicleResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            ChronicleError::Storage(StorageError::StoreUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })?;
        pragmas::apply_read_pragmas(&conn)?;
        debug!(path = %path.display(), "opened store read-only");
        Ok(Self { conn })
    }

    /// Open an in-memory store with the schema applied, writable
    /// through [`crate::import`] (for tests and the import pipeline).
    pub fn open_in_memory() -> ChronicleResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            ChronicleError::Storage(StorageError::StoreUnavailable {
                path: ":memory:".to_string(),
                reason: e.to_string(),
            })
        })?;
        pragmas::apply_base_pragmas(&conn)?;
        schema::create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Direct connection access, for the import surface and tests.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl HistoryStore for StoreEngine {
    fn search_rulers(&self, terms: &[String]) -> ChronicleResult<Vec<PeriodHit>> {
        queries::search_rulers(&self.conn, terms)
    }

    fn search_events(&self, terms: &[String]) -> ChronicleResult<Vec<EventHit>> {
        queries::search_events(&self.conn, terms)
    }

    fn periods_by_year(
        &self,
        year: &YearMatch,
        terms: &[String],
    ) -> ChronicleResult<Vec<PeriodHit>> {
        queries::periods_by_year(&self.conn, year, terms)
    }

    fn events_by_year(
        &self,
        year: &YearMatch,
        terms: &[String],
    ) -> ChronicleResult<Vec<EventHit>> {
        queries::events_by_year(&self.conn, year, terms)
    }

    fn position_for(&self, ruler_id: i64, title: &str) -> ChronicleResult<Option<i64>> {
        queries::position_for(&self.conn, ruler_id, title)
    }

    fn title_sequence(&self, title: &str) -> ChronicleResult<Vec<PeriodHit>> {
        queries::title_sequence(&self.conn, title)
    }
}
