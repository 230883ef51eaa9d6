//! Query modules, one per retrieval concern.

pub mod event_search;
pub mod lineage;
pub mod ruler_search;
pub mod year_lookup;

pub use event_search::search_events;
pub use lineage::{position_for, title_sequence};
pub use ruler_search::search_rulers;
pub use year_lookup::{events_by_year, periods_by_year};
