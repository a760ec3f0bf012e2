use bb8::RunError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::PoolError;
use thiserror::Error;

/// Coarse classification of a failed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseFailure {
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    CheckViolation,
    ConnectionClosed,
    PoolTimeout,
    Other,
}

/// Error returned by the stores.
///
/// `message` is exactly what the driver reported; callers wrap it with an
/// operation prefix and never rewrite it.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct DatabaseError {
    kind: DatabaseFailure,
    message: String,
}

impl DatabaseError {
    pub fn new(kind: DatabaseFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> DatabaseFailure {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Converts Diesel and pool errors into [`DatabaseError`] values.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error, classifying constraint violations.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    ///
    /// # Returns
    /// A DatabaseError carrying the driver's message unchanged
    pub fn convert_diesel_error(error: DieselError) -> DatabaseError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                DatabaseError::new(Self::classify(&kind), info.message())
            }
            other => DatabaseError::new(DatabaseFailure::Other, other.to_string()),
        }
    }

    /// Converts a failure to check a connection out of the pool.
    pub fn convert_pool_error(error: RunError<PoolError>) -> DatabaseError {
        match error {
            RunError::User(PoolError::QueryError(e)) => Self::convert_diesel_error(e),
            RunError::User(e) => DatabaseError::new(DatabaseFailure::ConnectionClosed, e.to_string()),
            RunError::TimedOut => DatabaseError::new(
                DatabaseFailure::PoolTimeout,
                "timed out waiting for a database connection",
            ),
        }
    }

    fn classify(kind: &DatabaseErrorKind) -> DatabaseFailure {
        match kind {
            DatabaseErrorKind::UniqueViolation => DatabaseFailure::UniqueViolation,
            DatabaseErrorKind::ForeignKeyViolation => DatabaseFailure::ForeignKeyViolation,
            DatabaseErrorKind::NotNullViolation => DatabaseFailure::NotNullViolation,
            DatabaseErrorKind::CheckViolation => DatabaseFailure::CheckViolation,
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                DatabaseFailure::ConnectionClosed
            }
            _ => DatabaseFailure::Other,
        }
    }
}

impl From<DieselError> for DatabaseError {
    fn from(error: DieselError) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error)
    }
}

impl From<RunError<PoolError>> for DatabaseError {
    fn from(error: RunError<PoolError>) -> Self {
        DatabaseErrorConverter::convert_pool_error(error)
    }
}
