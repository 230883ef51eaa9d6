/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store file cannot be opened. Fatal to the invocation: the
    /// caller must emit a single diagnostic result item.
    #[error("store unavailable at {path}: {reason}")]
    StoreUnavailable { path: String, reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },
}
