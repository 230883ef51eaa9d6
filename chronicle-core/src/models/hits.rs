use serde::{Deserialize, Serialize};

use super::{Event, Period, Ruler, Title};

/// A period joined to its ruler and title, as returned by retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodHit {
    pub ruler: Ruler,
    pub period: Period,
    pub title: Title,
    /// The discrete year that matched, for year-anchored retrieval.
    pub matched_year: Option<i64>,
}

/// An event hit, with its matched year for year-anchored retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventHit {
    pub event: Event,
    pub matched_year: Option<i64>,
}
