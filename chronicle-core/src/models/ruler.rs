use serde::{Deserialize, Serialize};

/// A historical person who held one or more titles.
///
/// Read-only reference entity; rows are created and maintained by the
/// external import pipeline and never mutated during a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruler {
    pub ruler_id: i64,
    /// Display name (regnal name where applicable).
    pub name: String,
    pub personal_name: Option<String>,
    pub epithet: Option<String>,
    pub biography: Option<String>,
    /// External reference link, usually an encyclopedia article.
    pub reference_link: Option<String>,
    pub notes: Option<String>,
}

impl Ruler {
    /// Primary action target: the stored reference link, or a
    /// constructed encyclopedia link from the display name.
    pub fn link(&self) -> String {
        match self.reference_link.as_deref().filter(|l| !l.is_empty()) {
            Some(link) => link.to_string(),
            None => format!("https://en.wikipedia.org/wiki/{}", self.name),
        }
    }

    /// Headline form: display name plus parenthesized epithet if any.
    pub fn display_name(&self) -> String {
        match self.epithet.as_deref().filter(|e| !e.is_empty()) {
            Some(epithet) => format!("{} ({epithet})", self.name),
            None => self.name.clone(),
        }
    }
}
