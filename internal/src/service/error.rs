//! Error types for service operations.

use crate::db::repository::RepositoryError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
///
/// Repository failures are wrapped rather than passed through so the HTTP
/// layer maps on a stable taxonomy; the original error stays attached as the
/// source.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The representation failed validation.
    #[error("{0}")]
    Validation(String),

    /// No resource exists for the requested id.
    #[error("no message found with id: {0}")]
    NotFound(i64),

    /// A storage constraint rejected the operation.
    #[error("{message}")]
    Integrity {
        message: String,
        #[source]
        source: RepositoryError,
    },

    /// Storage failed for any other reason.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: RepositoryError,
    },
}
