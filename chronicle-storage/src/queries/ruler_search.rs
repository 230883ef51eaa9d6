//! Conjunctive text search over rulers and their periods.

use rusqlite::{params_from_iter, Connection};

use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::PeriodHit;

use crate::filter::TextFilter;
use crate::rows::{collect_skipping_malformed, decode_period_hit, PERIOD_HIT_COLUMNS};
use crate::to_storage_err;

/// Columns a by-name term may match against: ruler display name,
/// personal name, epithet, notes, or the title name of any period.
const RULER_TEXT_COLUMNS: &[&str] = &[
    "ru.name",
    "ru.personal_name",
    "ru.epithet",
    "ru.notes",
    "t.name",
];

/// Every period of every ruler matching all terms, joined to ruler and
/// title. Ordered by ruler then tenure start, so the ranking stage can
/// group rows by ruler in retrieval order.
pub fn search_rulers(conn: &Connection, terms: &[String]) -> ChronicleResult<Vec<PeriodHit>> {
    let (clause, params) = TextFilter::new(RULER_TEXT_COLUMNS, terms).compile();
    let sql = format!(
        "SELECT {PERIOD_HIT_COLUMNS}
         FROM rulers ru
         JOIN periods p ON p.ruler_id = ru.ruler_id
         JOIN titles t ON t.title_id = p.title_id
         WHERE {clause}
         ORDER BY ru.ruler_id, p.start_year"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(params), |row| decode_period_hit(row, false))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(collect_skipping_malformed(rows, "period"))
}
