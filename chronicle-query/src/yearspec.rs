//! Resolution of the year anchor token into a [`YearMatch`] spec.
//!
//! The grammar must tell a sign apart from a range separator without a
//! dedicated date type: "-44" is one BC year, "1509-1547" is a range,
//! and "-509--27" is a negative-to-negative range whose leading minus
//! also counts as a hyphen.

use std::sync::LazyLock;

use regex::Regex;

use chronicle_core::models::YearMatch;

static SIGNED_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+)-(-?\d+)$").expect("signed range grammar"));

/// Resolve a year-like token into its match spec.
///
/// A token that fits none of the numeric forms degrades to a pattern
/// that can match no indexed year; the caller then produces the normal
/// no-results placeholder.
pub fn resolve(token: &str) -> YearMatch {
    let hyphens = token.matches('-').count();

    if hyphens == 1 && !token.starts_with('-') {
        // Exactly one hyphen, not a sign: a plain a-b range.
        if let Some((start, end)) = token.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.parse(), end.parse()) {
                return YearMatch::Between { start, end };
            }
        }
    } else if hyphens > 1 {
        // At least one bound is negative.
        if let Some(caps) = SIGNED_RANGE.captures(token) {
            if let (Ok(start), Ok(end)) = (caps[1].parse(), caps[2].parse()) {
                return YearMatch::Between { start, end };
            }
        }
        // Two-group form failed: fall back to a single exact year.
        if let Ok(year) = token.parse() {
            return YearMatch::Exact(year);
        }
    }

    // Wildcard or exact: strip the trailing asterisk run, keep the
    // remainder as a fixed prefix.
    let stripped = token.trim_end_matches('*');
    let wildcards = token.len() - stripped.len();
    if wildcards == 0 {
        if let Ok(year) = stripped.parse() {
            return YearMatch::Exact(year);
        }
    }
    YearMatch::Pattern {
        prefix: stripped.to_string(),
        wildcards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_years_resolve_exact() {
        assert_eq!(resolve("1789"), YearMatch::Exact(1789));
        assert_eq!(resolve("-44"), YearMatch::Exact(-44));
    }

    #[test]
    fn plain_ranges_resolve_inclusive_bounds() {
        assert_eq!(
            resolve("1509-1547"),
            YearMatch::Between { start: 1509, end: 1547 }
        );
    }

    #[test]
    fn signed_ranges_count_the_minus_as_a_hyphen() {
        assert_eq!(
            resolve("-509--27"),
            YearMatch::Between { start: -509, end: -27 }
        );
        assert_eq!(
            resolve("-100--50"),
            YearMatch::Between { start: -100, end: -50 }
        );
        assert_eq!(
            resolve("-100-50"),
            YearMatch::Between { start: -100, end: 50 }
        );
    }

    #[test]
    fn trailing_asterisks_become_wildcard_positions() {
        assert_eq!(
            resolve("177*"),
            YearMatch::Pattern { prefix: "177".to_string(), wildcards: 1 }
        );
        assert_eq!(
            resolve("17**"),
            YearMatch::Pattern { prefix: "17".to_string(), wildcards: 2 }
        );
    }

    #[test]
    fn wildcard_pattern_matches_same_length_years_only() {
        let spec = resolve("177*");
        for year in 1770..=1779 {
            assert!(spec.matches(year));
        }
        assert!(!spec.matches(177));
        assert!(!spec.matches(17700));
    }

    #[test]
    fn degenerate_tokens_resolve_to_unmatchable_patterns() {
        assert_eq!(
            resolve("509-"),
            YearMatch::Pattern { prefix: "509-".to_string(), wildcards: 0 }
        );
        assert!(!resolve("509-").matches(509));
    }
}
