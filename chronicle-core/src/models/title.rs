use serde::{Deserialize, Serialize};

/// A named office or rank ("Pope", "English Monarch").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub title_id: i64,
    pub name: String,
    /// Plural display form; absent for regularly pluralized names.
    pub plural: Option<String>,
    /// Total number of holders, for "k of N" displays.
    pub max_count: i64,
}

impl Title {
    /// Plural display form, defaulting to name + "s".
    pub fn plural_display(&self) -> String {
        match self.plural.as_deref().filter(|p| !p.is_empty()) {
            Some(plural) => plural.to_string(),
            None => format!("{}s", self.name),
        }
    }
}
