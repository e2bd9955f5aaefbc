use thiserror::Error;

/// Failure reported by a [`crate::DocumentStore`] backend.
///
/// The gateway never retries. Both variants carry the backend's own message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (client construction, server selection, I/O).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but rejected or failed the operation.
    #[error("store operation failed: {0}")]
    OperationFailed(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => StoreError::Unavailable(err.to_string()),
            _ => StoreError::OperationFailed(err.to_string()),
        }
    }
}
