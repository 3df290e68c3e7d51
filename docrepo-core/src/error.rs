//! Error types shared by every repository backend

use thiserror::Error;

/// Failures a repository operation can produce.
///
/// "Not found" is deliberately absent: reads return `Ok(None)` or an empty
/// `Vec`, and writes targeting a missing record are silent no-ops.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The caller passed an argument the operation cannot act on, such as
    /// an entity whose identifier is the nil UUID.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying store reported a failure. The cause is carried
    /// verbatim and never inspected or retried at this layer.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl RepositoryError {
    /// Wrap a driver error as a [`RepositoryError::Storage`].
    pub fn storage<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        RepositoryError::Storage(source.into())
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RepositoryError>;
