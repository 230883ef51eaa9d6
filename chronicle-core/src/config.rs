//! Invocation configuration and the explicit cross-invocation state.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-invocation configuration supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Path to the SQLite store file.
    pub db_path: PathBuf,
    /// Whether event search participates in name and year retrieval.
    pub show_events: bool,
}

impl QueryConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            show_events: true,
        }
    }
}

/// Which retrieval mode the invocation runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Free-text search (by name or by year, decided by classification).
    #[default]
    Search,
    /// Lineage view for a focal ruler and title.
    Lineage,
}

/// Explicit state carried between invocations.
///
/// The host echoes this back verbatim on the next invocation instead of
/// smuggling it through ambient process environment. Every result-item
/// action that changes mode embeds the next state in its variable map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub source: SourceMode,
    /// Focal ruler for the lineage mode.
    pub ruler_id: Option<i64>,
    /// Focal title name for the lineage mode.
    pub title: Option<String>,
    /// Focal position index within the title's holder sequence.
    pub position: Option<i64>,
    /// The query to re-run when the user backs out of a lineage view.
    pub restored_query: Option<String>,
}

impl QueryState {
    /// State for entering the lineage view of one title, anchored on a
    /// ruler and position, remembering the query to return to.
    pub fn lineage(ruler_id: i64, title: &str, position: i64, original_query: &str) -> Self {
        Self {
            source: SourceMode::Lineage,
            ruler_id: Some(ruler_id),
            title: Some(title.to_string()),
            position: Some(position),
            restored_query: Some(original_query.to_string()),
        }
    }

    /// Cleared state that returns to the plain search mode, optionally
    /// carrying the query to restore.
    pub fn cleared(restored_query: Option<&str>) -> Self {
        Self {
            restored_query: restored_query.map(str::to_string),
            ..Self::default()
        }
    }

    /// Flatten into the string variable map propagated on result-item
    /// actions. All keys are always present so stale values from a
    /// previous invocation are overwritten.
    pub fn to_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        let source = match self.source {
            SourceMode::Search => "search",
            SourceMode::Lineage => "lineage",
        };
        vars.insert("source".to_string(), source.to_string());
        vars.insert(
            "ruler_id".to_string(),
            self.ruler_id.map(|id| id.to_string()).unwrap_or_default(),
        );
        vars.insert("title".to_string(), self.title.clone().unwrap_or_default());
        vars.insert(
            "position".to_string(),
            self.position.map(|p| p.to_string()).unwrap_or_default(),
        );
        vars.insert(
            "restored_query".to_string(),
            self.restored_query.clone().unwrap_or_default(),
        );
        vars
    }

    /// Rebuild from the variable map echoed back by the host.
    /// Unparseable or missing values degrade to `None` rather than
    /// failing the invocation.
    pub fn from_variables(vars: &BTreeMap<String, String>) -> Self {
        let nonempty = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            source: match vars.get("source").map(String::as_str) {
                Some("lineage") => SourceMode::Lineage,
                _ => SourceMode::Search,
            },
            ruler_id: nonempty("ruler_id").and_then(|v| v.parse().ok()),
            title: nonempty("title"),
            position: nonempty("position").and_then(|v| v.parse().ok()),
            restored_query: nonempty("restored_query"),
        }
    }
}
