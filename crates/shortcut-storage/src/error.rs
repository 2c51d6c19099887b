use thiserror::Error;

/// Errors raised while bringing a storage backend up.
///
/// These are never recoverable: the process must not start serving traffic.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),
}
