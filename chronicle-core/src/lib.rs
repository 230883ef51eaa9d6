//! # chronicle-core
//!
//! Foundation crate for the chronicle history query engine.
//! Defines the domain models, error taxonomy, configuration, display
//! helpers, and the result-item contract consumed by the host picker UI.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod display;
pub mod errors;
pub mod icons;
pub mod logging;
pub mod models;
pub mod rank;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{QueryConfig, QueryState, SourceMode};
pub use errors::{ChronicleError, ChronicleResult};
pub use models::{
    ActionPayload, Event, EventHit, IconRef, Period, PeriodHit, ResultBatch, ResultItem, Ruler,
    Title, YearMatch,
};
pub use traits::HistoryStore;
