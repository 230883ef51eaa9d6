/// Query-pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A lineage invocation arrived without the state it needs.
    #[error("lineage request missing {field}")]
    IncompleteLineageState { field: &'static str },
}
