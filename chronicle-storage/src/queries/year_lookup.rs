//! Year-index retrieval for periods and events.
//!
//! The year predicate selects candidate rows through the denormalized
//! index; residual text terms AND onto it. Spans matched at several
//! discrete years collapse to one row keyed on the earliest match.

use rusqlite::{params_from_iter, Connection};

use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::{EventHit, PeriodHit, YearMatch};

use crate::filter::{year_predicate, TextFilter};
use crate::rows::{
    collect_skipping_malformed, decode_event_hit, decode_period_hit, EVENT_HIT_COLUMNS,
    PERIOD_HIT_COLUMNS,
};
use crate::to_storage_err;

/// Residual-term columns on the year path (ruler name / title name).
const PERIOD_YEAR_TEXT_COLUMNS: &[&str] = &["ru.name", "t.name"];
const EVENT_YEAR_TEXT_COLUMNS: &[&str] = &["e.name", "e.notes"];

/// Periods active in a matching year, ordered by matched year ascending.
pub fn periods_by_year(
    conn: &Connection,
    year: &YearMatch,
    terms: &[String],
) -> ChronicleResult<Vec<PeriodHit>> {
    let (year_clause, year_params) = year_predicate(year, "yi.year");
    let (text_clause, text_params) = TextFilter::new(PERIOD_YEAR_TEXT_COLUMNS, terms).compile();
    let sql = format!(
        "SELECT {PERIOD_HIT_COLUMNS}, MIN(yi.year) AS matched_year
         FROM year_index yi
         JOIN periods p ON p.period_id = yi.period_id
         JOIN rulers ru ON ru.ruler_id = p.ruler_id
         JOIN titles t ON t.title_id = p.title_id
         WHERE {year_clause} AND {text_clause}
         GROUP BY p.period_id
         ORDER BY matched_year, p.period_id"
    );
    let params = year_params.into_iter().chain(text_params);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(params), |row| decode_period_hit(row, true))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(collect_skipping_malformed(rows, "period"))
}

/// Events active in a matching year, ordered by matched year ascending.
pub fn events_by_year(
    conn: &Connection,
    year: &YearMatch,
    terms: &[String],
) -> ChronicleResult<Vec<EventHit>> {
    let (year_clause, year_params) = year_predicate(year, "yi.year");
    let (text_clause, text_params) = TextFilter::new(EVENT_YEAR_TEXT_COLUMNS, terms).compile();
    let sql = format!(
        "SELECT {EVENT_HIT_COLUMNS}, MIN(yi.year) AS matched_year
         FROM year_index yi
         JOIN events e ON e.event_id = yi.event_id
         WHERE {year_clause} AND {text_clause}
         GROUP BY e.event_id
         ORDER BY matched_year, e.event_id"
    );
    let params = year_params.into_iter().chain(text_params);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(params), |row| decode_event_hit(row, true))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(collect_skipping_malformed(rows, "event"))
}
