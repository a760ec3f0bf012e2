use crate::error::{DatabaseError, HashError, InputError};
use thiserror::Error;

/// Underlying failure wrapped by the operation-level variants of [`AppError`].
///
/// Renders the wrapped message verbatim so the operation prefix is the only
/// text added on top of what the database, hasher or parser reported.
#[derive(Error, Debug)]
pub enum FailureCause {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Application-wide error type.
///
/// The operation variants (`Creation`, `Query`, `Update`, `Deletion`,
/// `Lookup`) name the entity being worked on and carry the cause that made
/// the single statement fail. Nothing is retried before it reaches the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Insert failed, including malformed input detected before the insert
    #[error("Failed to create {entity}: {source}")]
    Creation {
        entity: &'static str,
        #[source]
        source: FailureCause,
    },

    /// Listing rows failed
    #[error("Failed to list {entity}: {source}")]
    Query {
        entity: &'static str,
        #[source]
        source: FailureCause,
    },

    /// Update by primary key failed at the database level
    #[error("Failed to update {entity}: {source}")]
    Update {
        entity: &'static str,
        #[source]
        source: FailureCause,
    },

    /// Delete by primary key failed at the database level
    #[error("Failed to delete {entity}: {source}")]
    Deletion {
        entity: &'static str,
        #[source]
        source: FailureCause,
    },

    /// Single-row lookup failed at the database level
    #[error("Failed to look up {entity}: {source}")]
    Lookup {
        entity: &'static str,
        #[source]
        source: FailureCause,
    },

    /// Password comparison requested without a candidate or a stored hash
    #[error("Password or password hash not provided")]
    MissingCredential,

    /// The stored hash could not be used for comparison
    #[error("Failed to verify password: {source}")]
    Verification {
        #[source]
        source: HashError,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn creation(entity: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Creation {
            entity,
            source: cause.into(),
        }
    }

    pub fn query(entity: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Query {
            entity,
            source: cause.into(),
        }
    }

    pub fn update(entity: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Update {
            entity,
            source: cause.into(),
        }
    }

    pub fn deletion(entity: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Deletion {
            entity,
            source: cause.into(),
        }
    }

    pub fn lookup(entity: &'static str, cause: impl Into<FailureCause>) -> Self {
        Self::Lookup {
            entity,
            source: cause.into(),
        }
    }

    /// The wrapped cause of an operation-level error, if any
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            Self::Creation { source, .. }
            | Self::Query { source, .. }
            | Self::Update { source, .. }
            | Self::Deletion { source, .. }
            | Self::Lookup { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatabaseFailure;

    #[test]
    fn test_creation_message_keeps_database_text() {
        let err = AppError::creation(
            "reservation",
            DatabaseError::new(
                DatabaseFailure::ForeignKeyViolation,
                "insert or update on table \"reservations\" violates foreign key constraint",
            ),
        );

        assert_eq!(
            err.to_string(),
            "Failed to create reservation: insert or update on table \"reservations\" violates foreign key constraint"
        );
    }

    #[test]
    fn test_each_operation_has_its_own_prefix() {
        let cause = || DatabaseError::new(DatabaseFailure::Other, "boom");

        assert_eq!(AppError::query("reservations", cause()).to_string(), "Failed to list reservations: boom");
        assert_eq!(AppError::update("user", cause()).to_string(), "Failed to update user: boom");
        assert_eq!(AppError::deletion("reservation", cause()).to_string(), "Failed to delete reservation: boom");
        assert_eq!(AppError::lookup("user", cause()).to_string(), "Failed to look up user: boom");
    }

    #[test]
    fn test_cause_is_exposed_for_operation_errors() {
        let err = AppError::lookup("user", DatabaseError::new(DatabaseFailure::ConnectionClosed, "gone"));
        match err.cause() {
            Some(FailureCause::Database(db)) => assert_eq!(db.kind(), DatabaseFailure::ConnectionClosed),
            other => panic!("Expected database cause, got: {:?}", other),
        }

        assert!(AppError::MissingCredential.cause().is_none());
    }

    #[test]
    fn test_input_cause_is_rendered_verbatim() {
        let err = AppError::creation(
            "reservation",
            InputError::new("total", "abc", "not a decimal number"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to create reservation: invalid total 'abc': not a decimal number"
        );
    }
}
