//! # chronicle-storage
//!
//! SQLite persistence for the chronicle dataset: rulers, titles,
//! periods, events, and the denormalized year index. The query core
//! opens the store read-only; the write surface in [`import`] exists
//! for the external import collaborator and for tests.

pub mod engine;
pub mod filter;
pub mod import;
pub mod pragmas;
pub mod queries;
pub mod schema;

mod rows;

pub use engine::StoreEngine;
pub use filter::TextFilter;

use chronicle_core::errors::{ChronicleError, StorageError};

/// Wrap a rusqlite failure into the storage taxonomy.
pub(crate) fn to_storage_err(message: String) -> ChronicleError {
    ChronicleError::Storage(StorageError::SqliteError { message })
}
