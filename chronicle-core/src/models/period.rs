use serde::{Deserialize, Serialize};

use crate::display::format_year;

/// One ruler's tenure in one title.
///
/// Invariants (maintained by the import pipeline): `start_year <=
/// end_year`; `position` is a dense 1..=max_count sequence per title,
/// ordered by historical occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub period_id: i64,
    pub ruler_id: i64,
    pub title_id: i64,
    /// Human-readable period label from the source data ("1509-47").
    pub label: String,
    /// Position index within the title's full holder sequence.
    pub position: i64,
    pub start_year: i64,
    pub end_year: i64,
    pub notes: Option<String>,
}

impl Period {
    /// "start-end" span, collapsed to a single year when start = end.
    pub fn span_display(&self) -> String {
        if self.start_year == self.end_year {
            format_year(self.start_year)
        } else {
            format!(
                "{}-{}",
                format_year(self.start_year),
                format_year(self.end_year)
            )
        }
    }
}
