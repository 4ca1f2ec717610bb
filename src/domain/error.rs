use thiserror::Error;

/// Errors raised by the record store and the status workflow.
///
/// None of these are fatal; the HTTP layer turns each into a response.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Record is already at the final stage")]
    AlreadyAtMax,

    #[error("Invalid username or password")]
    Authentication,

    #[error("Invalid status value: {0}")]
    InvalidStatus(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecordError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(what: impl Into<String>) -> Self {
        Self::Duplicate(what.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

impl From<sea_orm::DbErr> for RecordError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<tokio::task::JoinError> for RecordError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("Background task failed: {err}"))
    }
}
