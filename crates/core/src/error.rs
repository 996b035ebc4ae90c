/// Domain-level failures surfaced to callers of the directory.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more field-level checks failed. Messages are in check order.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Conflict: {0}")]
    Conflict(String),
}
