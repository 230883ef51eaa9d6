//! Domain models: the read-only reference entities, the joined hit
//! views returned by retrieval, the year match spec, and the
//! result-item output contract.

mod event;
mod hits;
mod period;
mod result_item;
mod ruler;
mod title;
mod year_match;

pub use event::Event;
pub use hits::{EventHit, PeriodHit};
pub use period::Period;
pub use result_item::{actions, ActionPayload, IconRef, ResultBatch, ResultItem};
pub use ruler::Ruler;
pub use title::Title;
pub use year_match::YearMatch;

/// Treat empty and lone-comma notes as absent; both are artifacts of
/// the upstream data import.
pub fn clean_notes(notes: Option<&str>) -> Option<&str> {
    notes.map(str::trim).filter(|n| !n.is_empty() && *n != ",")
}
