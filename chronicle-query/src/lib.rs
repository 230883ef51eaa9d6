//! # chronicle-query
//!
//! The query pipeline: term classification, year pattern resolution,
//! retrieval orchestration, ranking/merge, and result formatting.
//!
//! One invocation is one synchronous pass: classify the raw query,
//! resolve a year anchor if present, run the matching retrieval
//! strategy against the store, merge ruler and event hits into a
//! single globally-counted sequence, and render each hit into the
//! uniform result-item contract.

pub mod classify;
pub mod engine;
pub mod format;
pub mod rank;
pub mod yearspec;

pub use engine::{QueryEngine, QueryRequest};
