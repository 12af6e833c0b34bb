use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                DomainError::Conflict(format!("unique constraint violated: {}", db_err.message()))
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// SQLite rowids are signed; ids beyond `i64::MAX` can never match a row.
pub(super) fn db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}
