//! Seams between the query pipeline and its collaborators.

use crate::errors::ChronicleResult;
use crate::models::{EventHit, PeriodHit, YearMatch};

/// Read-only contract the storage collaborator must satisfy.
///
/// One invocation opens the store, runs one or more of these lookups
/// (lineage needs two), and releases it; no writes occur during query
/// processing.
pub trait HistoryStore {
    /// Conjunctive substring search: every term must occur in at least
    /// one of the ruler's text columns or the title name of one of its
    /// periods. Returns every matching period joined to ruler and
    /// title; grouping by ruler is the ranking stage's job.
    fn search_rulers(&self, terms: &[String]) -> ChronicleResult<Vec<PeriodHit>>;

    /// Conjunctive substring search over event name and notes.
    fn search_events(&self, terms: &[String]) -> ChronicleResult<Vec<EventHit>>;

    /// Periods selected through the year index, with residual terms
    /// filtering on ruler name / title name. Ordered by matched year
    /// ascending.
    fn periods_by_year(
        &self,
        year: &YearMatch,
        terms: &[String],
    ) -> ChronicleResult<Vec<PeriodHit>>;

    /// Events selected through the year index, with residual terms
    /// filtering on event name / notes. Ordered by matched year
    /// ascending.
    fn events_by_year(&self, year: &YearMatch, terms: &[String])
        -> ChronicleResult<Vec<EventHit>>;

    /// Point lookup of a ruler's earliest position index under a title.
    fn position_for(&self, ruler_id: i64, title: &str) -> ChronicleResult<Option<i64>>;

    /// The full holder sequence for a title, ordered by position.
    fn title_sequence(&self, title: &str) -> ChronicleResult<Vec<PeriodHit>>;
}
