pub mod admin;
pub mod crew;

use sea_orm::{DbErr, SqlErr};

use crate::domain::RecordError;

/// Maps an insert failure, turning a unique-index violation into
/// [`RecordError::Duplicate`].
pub(crate) fn map_insert_error(err: DbErr, what: impl FnOnce() -> String) -> RecordError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RecordError::Duplicate(what()),
        _ => RecordError::from(err),
    }
}
