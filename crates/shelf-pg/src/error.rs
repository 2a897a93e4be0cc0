use super::PgErr;
use shelf_core::ServiceError;
use tokio_postgres::error::SqlState;

/// Typed outcome of a failed storage call.
///
/// Classification happens once, here, from the SQLSTATE code; callers
/// switch on the variant and never inspect message text.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    Duplicate,
    #[error("no matching row")]
    NotFound,
    #[error("value too long for its column")]
    TooLong,
    #[error("database error: {0}")]
    Backend(PgErr),
}

impl From<PgErr> for StoreError {
    fn from(e: PgErr) -> Self {
        match e.code() {
            Some(code) if *code == SqlState::UNIQUE_VIOLATION => Self::Duplicate,
            Some(code) if *code == SqlState::STRING_DATA_RIGHT_TRUNCATION => Self::TooLong,
            _ => Self::Backend(e),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate => Self::Conflict,
            StoreError::NotFound => Self::NotFound,
            StoreError::TooLong => Self::validation("value too long"),
            StoreError::Backend(e) => Self::internal(e),
        }
    }
}
