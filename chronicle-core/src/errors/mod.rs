//! Error taxonomy for the chronicle workspace.

mod query_error;
mod storage_error;

pub use query_error::QueryError;
pub use storage_error::StorageError;

/// Top-level error wrapping each subsystem's taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ChronicleError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

pub type ChronicleResult<T> = Result<T, ChronicleError>;
