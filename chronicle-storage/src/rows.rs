//! Row decoding for query results.
//!
//! A row that fails to decode is skipped with a diagnostic; it never
//! aborts the batch.

use rusqlite::Row;
use tracing::warn;

use chronicle_core::models::{Event, EventHit, Period, PeriodHit, Ruler, Title};

/// SELECT columns for a period joined to its ruler and title
/// (17 columns, indices 0-16; an optional matched_year is index 17).
pub(crate) const PERIOD_HIT_COLUMNS: &str = "\
    ru.ruler_id, ru.name, ru.personal_name, ru.epithet, ru.biography, \
    ru.reference_link, ru.notes, \
    p.period_id, p.label, p.position, p.start_year, p.end_year, p.notes, \
    t.title_id, t.name, t.plural, t.max_count";

/// SELECT columns for an event (6 columns; optional matched_year is 6).
pub(crate) const EVENT_HIT_COLUMNS: &str =
    "e.event_id, e.name, e.start_year, e.end_year, e.notes, e.reference_link";

pub(crate) fn decode_period_hit(row: &Row<'_>, with_year: bool) -> rusqlite::Result<PeriodHit> {
    let ruler = Ruler {
        ruler_id: row.get(0)?,
        name: row.get(1)?,
        personal_name: row.get(2)?,
        epithet: row.get(3)?,
        biography: row.get(4)?,
        reference_link: row.get(5)?,
        notes: row.get(6)?,
    };
    let title = Title {
        title_id: row.get(13)?,
        name: row.get(14)?,
        plural: row.get(15)?,
        max_count: row.get(16)?,
    };
    let period = Period {
        period_id: row.get(7)?,
        ruler_id: ruler.ruler_id,
        title_id: title.title_id,
        label: row.get(8)?,
        position: row.get(9)?,
        start_year: row.get(10)?,
        end_year: row.get(11)?,
        notes: row.get(12)?,
    };
    let matched_year = if with_year { row.get(17)? } else { None };
    Ok(PeriodHit {
        ruler,
        period,
        title,
        matched_year,
    })
}

pub(crate) fn decode_event_hit(row: &Row<'_>, with_year: bool) -> rusqlite::Result<EventHit> {
    let event = Event {
        event_id: row.get(0)?,
        name: row.get(1)?,
        start_year: row.get(2)?,
        end_year: row.get(3)?,
        notes: row.get(4)?,
        reference_link: row.get(5)?,
    };
    let matched_year = if with_year { row.get(6)? } else { None };
    Ok(EventHit {
        event,
        matched_year,
    })
}

/// Drain a mapped-row iterator, skipping rows that fail to decode.
pub(crate) fn collect_skipping_malformed<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
    entity: &'static str,
) -> Vec<T> {
    let mut out = Vec::new();
    for row in rows {
        match row {
            Ok(hit) => out.push(hit),
            Err(e) => warn!(entity, error = %e, "skipping malformed row"),
        }
    }
    out
}
