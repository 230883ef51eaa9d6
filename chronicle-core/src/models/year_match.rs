use serde::{Deserialize, Serialize};

/// Match spec resolved from the query's year anchor token.
///
/// The storage layer compiles this into a parameterized predicate over
/// the year index; [`YearMatch::matches`] carries the same semantics
/// for use outside the storage engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearMatch {
    /// Exact year, signed ("-44" is 44 BC).
    Exact(i64),
    /// Inclusive bounds over the indexed year.
    Between { start: i64, end: i64 },
    /// Fixed decimal prefix plus a run of single-position wildcards:
    /// prefix "177" with 1 wildcard matches exactly 1770-1779.
    Pattern { prefix: String, wildcards: usize },
}

impl YearMatch {
    /// Evaluate against a concrete year, independent of SQL
    /// compilation. A pattern matches when the year's decimal string
    /// is exactly prefix + one character per wildcard position.
    pub fn matches(&self, year: i64) -> bool {
        match self {
            YearMatch::Exact(y) => year == *y,
            YearMatch::Between { start, end } => (*start..=*end).contains(&year),
            YearMatch::Pattern { prefix, wildcards } => {
                let s = year.to_string();
                s.len() == prefix.len() + wildcards && s.starts_with(prefix.as_str())
            }
        }
    }

    /// Whether the anchor denotes more than one possible year, in
    /// which case headlines echo the raw anchor token instead of a
    /// single matched year.
    pub fn is_multi_year(&self) -> bool {
        match self {
            YearMatch::Exact(_) => false,
            YearMatch::Between { .. } => true,
            YearMatch::Pattern { wildcards, .. } => *wildcards > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_one_year() {
        let m = YearMatch::Exact(-44);
        assert!(m.matches(-44));
        assert!(!m.matches(44));
        assert!(!m.is_multi_year());
    }

    #[test]
    fn between_is_inclusive() {
        let m = YearMatch::Between { start: -100, end: -50 };
        assert!(m.matches(-100));
        assert!(m.matches(-50));
        assert!(!m.matches(-49));
    }

    #[test]
    fn pattern_matches_same_length_only() {
        let m = YearMatch::Pattern { prefix: "177".to_string(), wildcards: 1 };
        assert!(m.matches(1770));
        assert!(m.matches(1779));
        assert!(!m.matches(177));
        assert!(!m.matches(17700));
        assert!(!m.matches(1670));
    }

    #[test]
    fn zero_wildcards_is_exact_string_match() {
        let m = YearMatch::Pattern { prefix: "1789".to_string(), wildcards: 0 };
        assert!(m.matches(1789));
        assert!(!m.matches(178));
        assert!(!m.is_multi_year());
    }
}
