//! The uniform result-item contract consumed by the host picker UI.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names of the secondary actions a result item may carry.
pub mod actions {
    /// Jump to the entity's end year.
    pub const JUMP_TO_END: &str = "jump_to_end";
    /// Jump to the entity's start year.
    pub const JUMP_TO_START: &str = "jump_to_start";
    /// List all holders of the item's highest-ranked title.
    pub const SHOW_LINEAGE: &str = "show_lineage";
    /// Return to the original query, clearing any lineage state.
    pub const GO_BACK: &str = "go_back";
    /// Copy the full rendered text.
    pub const COPY_TEXT: &str = "copy_text";
}

/// An ordered batch of result items.
///
/// Always well-formed: empty for an empty query, a single placeholder
/// for a no-match query, a single diagnostic item when the store is
/// unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBatch {
    pub items: Vec<ResultItem>,
}

impl ResultBatch {
    pub fn single(item: ResultItem) -> Self {
        Self { items: vec![item] }
    }

    /// Serialize for the host picker.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One formatted hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub headline: String,
    pub subtitle: String,
    /// Whether the primary action may be triggered.
    pub valid: bool,
    /// Primary action payload: a URL or a year.
    pub arg: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, ActionPayload>,
    pub icon: IconRef,
}

/// A named secondary action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub valid: bool,
    pub arg: String,
    pub subtitle: String,
    /// State variables propagated to the next invocation.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
}

/// Reference to an icon the host resolves to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRef {
    pub path: String,
}

impl IconRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_serializes_to_empty_items() {
        let json = ResultBatch::default().to_json().unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }

    #[test]
    fn actions_map_is_omitted_when_empty() {
        let item = ResultItem {
            headline: "h".to_string(),
            subtitle: "s".to_string(),
            valid: false,
            arg: String::new(),
            actions: BTreeMap::new(),
            icon: IconRef::new("icons/hopeless.png"),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("actions"));
    }
}
