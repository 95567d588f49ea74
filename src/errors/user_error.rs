//! Domain errors raised by the user repository and service.

use thiserror::Error;

/// SQLSTATE raised when a value exceeds a column's declared length.
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

#[derive(Debug, Error)]
pub enum UserError {
    /// Name or email was blank.
    #[error("name and email must not be empty")]
    EmptyFields,
    /// No row matched the requested id.
    #[error("user not found")]
    NotFound,
    /// Any other database failure: constraint violations, connectivity, decoding.
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl UserError {
    /// True when the database rejected a duplicate value on a unique column.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            UserError::Storage(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }

    /// True when a value was longer than its VARCHAR column allows.
    pub fn is_value_too_long(&self) -> bool {
        match self {
            UserError::Storage(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION)
            }
            _ => false,
        }
    }
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => UserError::NotFound,
            other => UserError::Storage(other),
        }
    }
}
