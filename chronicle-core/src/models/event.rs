use serde::{Deserialize, Serialize};

use crate::display::format_year;

/// A historical event. Single-year events have start = end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub name: String,
    pub start_year: i64,
    pub end_year: i64,
    pub notes: Option<String>,
    pub reference_link: Option<String>,
}

impl Event {
    /// Primary action target, with the constructed-article fallback.
    pub fn link(&self) -> String {
        match self.reference_link.as_deref().filter(|l| !l.is_empty()) {
            Some(link) => link.to_string(),
            None => format!("https://en.wikipedia.org/wiki/{}", self.name),
        }
    }

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

    pub fn is_single_year(&self) -> bool {
        self.start_year == self.end_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_and_link() {
        let event = Event {
            event_id: 1,
            name: "French Revolution".to_string(),
            start_year: 1789,
            end_year: 1799,
            notes: None,
            reference_link: None,
        };
        assert_eq!(event.span_display(), "1789-1799");
        assert!(!event.is_single_year());
        assert_eq!(
            event.link(),
            "https://en.wikipedia.org/wiki/French Revolution"
        );
    }
}
