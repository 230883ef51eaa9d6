//! Icon lookup for titles and fixed item kinds.
//!
//! Pure lookup-with-fallback: whether the file exists on disk is the
//! host's concern.

/// Fallback icon for any ruler title without a dedicated icon.
pub const RULER_FALLBACK: &str = "icons/crown.png";
/// Fixed icon for event items.
pub const EVENT: &str = "icons/event.png";
/// Icon for the placeholder / diagnostic item.
pub const EMPTY: &str = "icons/hopeless.png";

const TITLE_ICONS: &[(&str, &str)] = &[
    ("pope", "icons/pope.png"),
    ("roman emperor", "icons/laurel.png"),
    ("french monarch", "icons/france.png"),
    ("byzantine emperor", "icons/chi-rho.png"),
    ("english monarch", "icons/british.png"),
    ("holy roman emperor", "icons/holy-roman.png"),
    ("us president", "icons/usa.png"),
    ("british pm", "icons/uk-pm.png"),
];

/// Icon path for a title, falling back to the generic ruler icon.
pub fn for_title(title: &str) -> &'static str {
    let normalized = title.trim().to_lowercase();
    TITLE_ICONS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, path)| *path)
        .unwrap_or(RULER_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_titles_get_their_icon() {
        assert_eq!(for_title("Pope"), "icons/pope.png");
        assert_eq!(for_title("roman emperor"), "icons/laurel.png");
    }

    #[test]
    fn unknown_titles_fall_back() {
        assert_eq!(for_title("Consul"), RULER_FALLBACK);
    }
}
