//! Static display-priority ranking for titles.
//!
//! A ruler often holds several titles at once; the rank decides which
//! title group leads the subtitle and which icon the item wears. Lower
//! rank sorts first. Display ordering only, never persisted.

/// Rank assigned to titles with no mapping in the table.
pub const UNRANKED: u32 = 1000;

/// Normalized title → rank. Order within the table is irrelevant;
/// lookups take the minimum matching rank.
const RANK_TABLE: &[(&str, u32)] = &[
    ("roman emperor", 1),
    ("byzantine emperor", 2),
    ("holy roman emperor", 3),
    ("king", 10),
    ("queen", 10),
    ("emperor", 15),
    ("tsar", 20),
    ("czar", 20),
    ("president", 30),
    ("prime minister", 35),
    ("premier", 35),
    ("chancellor", 40),
    ("duke", 50),
    ("duchess", 50),
    ("pope", 55),
    ("patriarch", 60),
    ("consul", 100),
    ("tribune", 110),
    ("dictator", 120),
];

/// Display priority for a title name.
///
/// An exact match on the normalized (trimmed, lowercased) name wins.
/// For data not yet mapped to a canonical identifier, the documented
/// fallback is a case-insensitive substring scan taking the best
/// (lowest) matching rank; anything else gets [`UNRANKED`].
pub fn title_rank(title: &str) -> u32 {
    let normalized = title.trim().to_lowercase();
    if let Some((_, rank)) = RANK_TABLE.iter().find(|(name, _)| *name == normalized) {
        return *rank;
    }
    RANK_TABLE
        .iter()
        .filter(|(name, _)| normalized.contains(name))
        .map(|(_, rank)| *rank)
        .min()
        .unwrap_or(UNRANKED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches_beat_substring_overlap() {
        // "holy roman emperor" contains "roman emperor" (rank 1), but the
        // canonical entry must win.
        assert_eq!(title_rank("Holy Roman Emperor"), 3);
        assert_eq!(title_rank("Roman Emperor"), 1);
        assert_eq!(title_rank("Byzantine Emperor"), 2);
    }

    #[test]
    fn substring_fallback_for_unmapped_titles() {
        assert_eq!(title_rank("King of France"), 10);
        assert_eq!(title_rank("Queen of Scots"), 10);
        assert_eq!(title_rank("British Prime Minister"), 35);
        assert_eq!(title_rank("Pope of Alexandria"), 55);
    }

    #[test]
    fn king_sorts_before_pope() {
        assert!(title_rank("King") < title_rank("Pope"));
    }

    #[test]
    fn unknown_titles_rank_last() {
        assert_eq!(title_rank("Shogun"), UNRANKED);
        assert_eq!(title_rank(""), UNRANKED);
    }
}
