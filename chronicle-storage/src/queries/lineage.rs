//! Two-phase lineage lookup: resolve the focal position, then load the
//! full holder sequence for a title.

use rusqlite::{params, Connection, OptionalExtension};

use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::PeriodHit;

use crate::rows::{collect_skipping_malformed, decode_period_hit, PERIOD_HIT_COLUMNS};
use crate::to_storage_err;

/// Point lookup of a ruler's earliest position index under a title.
pub fn position_for(
    conn: &Connection,
    ruler_id: i64,
    title: &str,
) -> ChronicleResult<Option<i64>> {
    conn.query_row(
        "SELECT p.position
         FROM periods p
         JOIN titles t ON t.title_id = p.title_id
         WHERE p.ruler_id = ?1 AND t.name = ?2
         ORDER BY p.position ASC
         LIMIT 1",
        params![ruler_id, title],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// The full holder sequence for a title, ordered by position.
pub fn title_sequence(conn: &Connection, title: &str) -> ChronicleResult<Vec<PeriodHit>> {
    let sql = format!(
        "SELECT {PERIOD_HIT_COLUMNS}
         FROM periods p
         JOIN rulers ru ON ru.ruler_id = p.ruler_id
         JOIN titles t ON t.title_id = p.title_id
         WHERE t.name = ?1
         ORDER BY p.position ASC"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![title], |row| decode_period_hit(row, false))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(collect_skipping_malformed(rows, "period"))
}
