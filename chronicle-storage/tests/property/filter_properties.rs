//! Property tests: compiled year predicates agree with the pure
//! YearMatch semantics for every generated dataset.

use proptest::prelude::*;
use rusqlite::{params, params_from_iter, Connection};

use chronicle_core::models::YearMatch;
use chronicle_storage::filter::year_predicate;

fn years_table(years: &[i64]) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE y (year INTEGER NOT NULL)")
        .unwrap();
    for year in years {
        conn.execute("INSERT INTO y (year) VALUES (?1)", params![year])
            .unwrap();
    }
    conn
}

fn select_matching(conn: &Connection, spec: &YearMatch) -> Vec<i64> {
    let (clause, bind) = year_predicate(spec, "year");
    let sql = format!("SELECT year FROM y WHERE {clause} ORDER BY year");
    let mut stmt = conn.prepare(&sql).unwrap();
    stmt.query_map(params_from_iter(bind), |row| row.get(0))
        .unwrap()
        .map(Result::unwrap)
        .collect()
}

fn expected_matching(years: &[i64], spec: &YearMatch) -> Vec<i64> {
    let mut expected: Vec<i64> = years.iter().copied().filter(|y| spec.matches(*y)).collect();
    expected.sort_unstable();
    expected
}

proptest! {
    #[test]
    fn prop_pattern_sql_agrees_with_pure_matches(
        prefix in "[1-9][0-9]{0,2}",
        wildcards in 0usize..3,
        years in proptest::collection::vec(-3000i64..3000, 1..40),
    ) {
        let spec = YearMatch::Pattern { prefix, wildcards };
        let conn = years_table(&years);
        prop_assert_eq!(select_matching(&conn, &spec), expected_matching(&years, &spec));
    }

    #[test]
    fn prop_between_sql_agrees_with_pure_matches(
        (start, end) in (-600i64..2100, -600i64..2100).prop_map(|(a, b)| (a.min(b), a.max(b))),
        years in proptest::collection::vec(-600i64..2100, 1..40),
    ) {
        let spec = YearMatch::Between { start, end };
        let conn = years_table(&years);
        prop_assert_eq!(select_matching(&conn, &spec), expected_matching(&years, &spec));
    }

    #[test]
    fn prop_exact_sql_agrees_with_pure_matches(
        target in -600i64..2100,
        years in proptest::collection::vec(-600i64..2100, 1..40),
    ) {
        let spec = YearMatch::Exact(target);
        let conn = years_table(&years);
        prop_assert_eq!(select_matching(&conn, &spec), expected_matching(&years, &spec));
    }
}
