//! Conjunctive text search over events.

use rusqlite::{params_from_iter, Connection};

use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::EventHit;

use crate::filter::TextFilter;
use crate::rows::{collect_skipping_malformed, decode_event_hit, EVENT_HIT_COLUMNS};
use crate::to_storage_err;

const EVENT_TEXT_COLUMNS: &[&str] = &["e.name", "e.notes"];

/// Events matching all terms in name or notes, ordered by start year.
pub fn search_events(conn: &Connection, terms: &[String]) -> ChronicleResult<Vec<EventHit>> {
    let (clause, params) = TextFilter::new(EVENT_TEXT_COLUMNS, terms).compile();
    let sql = format!(
        "SELECT {EVENT_HIT_COLUMNS}
         FROM events e
         WHERE {clause}
         ORDER BY e.start_year"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(params), |row| decode_event_hit(row, false))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(collect_skipping_malformed(rows, "event"))
}
