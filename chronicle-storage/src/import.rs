//! Minimal write surface for the external import collaborator and for
//! tests: entity inserts plus year-index maintenance.
//!
//! Every discrete year a period or event touches gets a year_index
//! row, so range and wildcard lookups never rescan the span tables.

use rusqlite::{params, Connection};

use chronicle_core::errors::ChronicleResult;
use chronicle_core::models::{Event, Period, Ruler, Title};

use crate::to_storage_err;

pub fn insert_ruler(conn: &Connection, ruler: &Ruler) -> ChronicleResult<()> {
    conn.execute(
        "INSERT INTO rulers (ruler_id, name, personal_name, epithet, biography, reference_link, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ruler.ruler_id,
            ruler.name,
            ruler.personal_name,
            ruler.epithet,
            ruler.biography,
            ruler.reference_link,
            ruler.notes,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn insert_title(conn: &Connection, title: &Title) -> ChronicleResult<()> {
    conn.execute(
        "INSERT INTO titles (title_id, name, plural, max_count) VALUES (?1, ?2, ?3, ?4)",
        params![title.title_id, title.name, title.plural, title.max_count],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Insert a period and index every year of its span.
pub fn insert_period(conn: &Connection, period: &Period) -> ChronicleResult<()> {
    conn.execute(
        "INSERT INTO periods (period_id, ruler_id, title_id, label, position, start_year, end_year, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            period.period_id,
            period.ruler_id,
            period.title_id,
            period.label,
            period.position,
            period.start_year,
            period.end_year,
            period.notes,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    for year in period.start_year..=period.end_year {
        conn.execute(
            "INSERT INTO year_index (year, period_id, event_id) VALUES (?1, ?2, NULL)",
            params![year, period.period_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// Insert an event and index every year of its span.
pub fn insert_event(conn: &Connection, event: &Event) -> ChronicleResult<()> {
    conn.execute(
        "INSERT INTO events (event_id, name, start_year, end_year, notes, reference_link)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            event.event_id,
            event.name,
            event.start_year,
            event.end_year,
            event.notes,
            event.reference_link,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    for year in event.start_year..=event.end_year {
        conn.execute(
            "INSERT INTO year_index (year, period_id, event_id) VALUES (?1, NULL, ?2)",
            params![year, event.event_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}
