//! Store error taxonomy.

/// Failures surfaced by a [`RecordStore`](super::RecordStore).
///
/// `NotFound` is kept separate from store faults so callers can decide how each
/// maps onto the wire.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("record already exists: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Short stable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::Duplicate(_) => "duplicate",
            StoreError::Database(_) => "database",
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
