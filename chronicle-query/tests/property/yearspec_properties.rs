//! Property tests: the year token grammar and its resolution into
//! match specs.

use proptest::prelude::*;

use chronicle_core::models::YearMatch;
use chronicle_query::classify::is_year_like;
use chronicle_query::yearspec::resolve;

proptest! {
    #[test]
    fn prop_plain_ranges_resolve_to_between(a in 0i64..3000, b in 0i64..3000) {
        let token = format!("{a}-{b}");
        prop_assert!(is_year_like(&token));
        prop_assert_eq!(resolve(&token), YearMatch::Between { start: a, end: b });
    }

    #[test]
    fn prop_signed_ranges_resolve_to_between(a in -3000i64..0, b in -3000i64..3000) {
        let token = format!("{a}-{b}");
        prop_assert!(is_year_like(&token));
        prop_assert_eq!(resolve(&token), YearMatch::Between { start: a, end: b });
    }

    #[test]
    fn prop_wildcard_count_decides_exact_vs_pattern(
        prefix in "[1-9][0-9]{0,3}",
        wildcards in 0usize..4,
    ) {
        let token = format!("{}{}", prefix, "*".repeat(wildcards));
        prop_assert!(is_year_like(&token));
        match resolve(&token) {
            YearMatch::Exact(year) => {
                prop_assert_eq!(wildcards, 0);
                prop_assert_eq!(year.to_string(), prefix);
            }
            YearMatch::Pattern { prefix: p, wildcards: w } => {
                prop_assert!(wildcards > 0);
                prop_assert_eq!(p, prefix);
                prop_assert_eq!(w, wildcards);
            }
            other => prop_assert!(false, "unexpected spec {other:?}"),
        }
    }

    #[test]
    fn prop_pattern_matches_exactly_the_same_length_expansions(
        prefix in "[1-9][0-9]{0,2}",
        wildcards in 1usize..3,
        candidate in -10_000i64..10_000,
    ) {
        let spec = resolve(&format!("{}{}", prefix, "*".repeat(wildcards)));
        let rendered = candidate.to_string();
        let expected =
            rendered.len() == prefix.len() + wildcards && rendered.starts_with(&prefix);
        prop_assert_eq!(spec.matches(candidate), expected);
    }
}
