//! Integration tests: the HistoryStore contract against a real
//! SQLite database.

use rusqlite::params;

use chronicle_core::models::{Event, Period, Ruler, Title, YearMatch};
use chronicle_core::traits::HistoryStore;
use chronicle_storage::{import, schema, StoreEngine};

fn ruler(ruler_id: i64, name: &str) -> Ruler {
    Ruler {
        ruler_id,
        name: name.to_string(),
        personal_name: None,
        epithet: None,
        biography: None,
        reference_link: None,
        notes: None,
    }
}

fn title(title_id: i64, name: &str, max_count: i64) -> Title {
    Title {
        title_id,
        name: name.to_string(),
        plural: None,
        max_count,
    }
}

fn period(
    period_id: i64,
    ruler_id: i64,
    title_id: i64,
    position: i64,
    start_year: i64,
    end_year: i64,
) -> Period {
    Period {
        period_id,
        ruler_id,
        title_id,
        label: format!("{start_year}-{end_year}"),
        position,
        start_year,
        end_year,
        notes: None,
    }
}

/// Small fixture: a pope, a French king, a Roman emperor, two events.
fn seeded_store() -> StoreEngine {
    let engine = StoreEngine::open_in_memory().unwrap();
    let conn = engine.conn();

    import::insert_title(conn, &title(1, "Pope", 266)).unwrap();
    import::insert_title(conn, &title(2, "King of France", 40)).unwrap();
    import::insert_title(conn, &title(3, "Roman Emperor", 70)).unwrap();

    let mut innocent = ruler(1, "Innocent III");
    innocent.personal_name = Some("Lotario dei Conti".to_string());
    import::insert_ruler(conn, &innocent).unwrap();

    let mut louis = ruler(2, "Louis XVI");
    louis.notes = Some("deposed during the Revolution".to_string());
    import::insert_ruler(conn, &louis).unwrap();

    let mut augustus = ruler(3, "Augustus");
    augustus.personal_name = Some("Octavian".to_string());
    import::insert_ruler(conn, &augustus).unwrap();

    import::insert_period(conn, &period(1, 1, 1, 176, 1198, 1216)).unwrap();
    import::insert_period(conn, &period(2, 2, 2, 33, 1774, 1792)).unwrap();
    import::insert_period(conn, &period(3, 3, 3, 1, -27, 14)).unwrap();

    import::insert_event(
        conn,
        &Event {
            event_id: 1,
            name: "French Revolution".to_string(),
            start_year: 1789,
            end_year: 1799,
            notes: Some("overthrew the monarchy".to_string()),
            reference_link: None,
        },
    )
    .unwrap();
    import::insert_event(
        conn,
        &Event {
            event_id: 2,
            name: "Fall of Rome".to_string(),
            start_year: 476,
            end_year: 476,
            notes: None,
            reference_link: None,
        },
    )
    .unwrap();

    engine
}

#[test]
fn search_rulers_is_conjunctive_across_columns() {
    let store = seeded_store();

    let hits = store.search_rulers(&["louis".to_string()]).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Louis XVI");

    // Second term matches the title name, not a ruler column.
    let hits = store
        .search_rulers(&["louis".to_string(), "france".to_string()])
        .unwrap();
    assert_eq!(hits.len(), 1);

    // Terms that never co-occur yield nothing.
    let hits = store
        .search_rulers(&["louis".to_string(), "pope".to_string()])
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn search_rulers_matches_personal_name_and_notes() {
    let store = seeded_store();

    let hits = store.search_rulers(&["octavian".to_string()]).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Augustus");

    let hits = store.search_rulers(&["deposed".to_string()]).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Louis XVI");
}

#[test]
fn search_events_matches_name_and_notes() {
    let store = seeded_store();

    let hits = store
        .search_events(&["revolution".to_string(), "monarchy".to_string()])
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].event.name, "French Revolution");
}

#[test]
fn periods_by_exact_year() {
    let store = seeded_store();

    let hits = store
        .periods_by_year(&YearMatch::Exact(1789), &[])
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Louis XVI");
    assert_eq!(hits[0].matched_year, Some(1789));
}

#[test]
fn periods_by_negative_exact_year() {
    let store = seeded_store();

    let hits = store.periods_by_year(&YearMatch::Exact(-27), &[]).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Augustus");
}

#[test]
fn periods_by_range_collapse_to_one_row_per_period() {
    let store = seeded_store();

    let hits = store
        .periods_by_year(&YearMatch::Between { start: 1198, end: 1216 }, &[])
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Innocent III");
    // Earliest matched year keys the collapsed row.
    assert_eq!(hits[0].matched_year, Some(1198));
}

#[test]
fn periods_by_wildcard_pattern() {
    let store = seeded_store();

    let hits = store
        .periods_by_year(
            &YearMatch::Pattern { prefix: "177".to_string(), wildcards: 1 },
            &[],
        )
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ruler.name, "Louis XVI");
    assert_eq!(hits[0].matched_year, Some(1774));
}

#[test]
fn year_lookup_ands_residual_terms() {
    let store = seeded_store();

    let hits = store
        .periods_by_year(&YearMatch::Exact(1789), &["france".to_string()])
        .unwrap();
    assert_eq!(hits.len(), 1);

    let hits = store
        .periods_by_year(&YearMatch::Exact(1789), &["pope".to_string()])
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn events_by_year_ordered_by_matched_year() {
    let store = seeded_store();

    let hits = store
        .events_by_year(&YearMatch::Between { start: 400, end: 1800 }, &[])
        .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].event.name, "Fall of Rome");
    assert_eq!(hits[1].event.name, "French Revolution");
    assert_eq!(hits[1].matched_year, Some(1789));
}

#[test]
fn position_lookup_and_title_sequence() {
    let store = seeded_store();
    let conn = store.conn();

    // A second pope, later in the sequence.
    import::insert_ruler(conn, &ruler(4, "Honorius III")).unwrap();
    import::insert_period(conn, &period(4, 4, 1, 177, 1216, 1227)).unwrap();

    assert_eq!(store.position_for(1, "Pope").unwrap(), Some(176));
    assert_eq!(store.position_for(1, "King of France").unwrap(), None);

    let sequence = store.title_sequence("Pope").unwrap();
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence[0].period.position, 176);
    assert_eq!(sequence[1].period.position, 177);
    assert_eq!(sequence[1].title.max_count, 266);
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let store = seeded_store();

    // Text years survive INTEGER affinity and fail i64 decoding.
    store
        .conn()
        .execute(
            "INSERT INTO periods (period_id, ruler_id, title_id, label, position, start_year, end_year, notes)
             VALUES (99, 1, 1, 'broken', 999, 'aaa', 'bbb', NULL)",
            params![],
        )
        .unwrap();

    let hits = store.search_rulers(&["innocent".to_string()]).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].period.period_id, 1);
}

#[test]
fn read_only_open_rejects_writes_and_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chronicle.db");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        schema::create_schema(&conn).unwrap();
        import::insert_title(&conn, &title(1, "Pope", 266)).unwrap();
    }

    let store = StoreEngine::open(&path).unwrap();
    let err = store.conn().execute(
        "INSERT INTO titles (title_id, name, plural, max_count) VALUES (2, 'Consul', NULL, 1000)",
        params![],
    );
    assert!(err.is_err());

    assert!(StoreEngine::open(&dir.path().join("missing.db")).is_err());
}
