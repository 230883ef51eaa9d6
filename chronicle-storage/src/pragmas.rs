//! PRAGMA configuration for store connections.
//!
//! LIKE must be case-insensitive: the conjunctive substring contract
//! is case-insensitive by definition.

use rusqlite::Connection;

use chronicle_core::errors::ChronicleResult;

use crate::to_storage_err;

/// Pragmas applied to every connection.
pub fn apply_base_pragmas(conn: &Connection) -> ChronicleResult<()> {
    conn.execute_batch(
        "
        PRAGMA case_sensitive_like = OFF;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Additionally lock the connection into read-only behavior.
/// The query core never writes; this makes that a hard guarantee.
pub fn apply_read_pragmas(conn: &Connection) -> ChronicleResult<()> {
    apply_base_pragmas(conn)?;
    conn.execute_batch("PRAGMA query_only = ON;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
