use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TestInfraError>;

#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("container failed: {0}")]
    Container(#[from] testcontainers::TestcontainersError),
    #[error("database call failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("postgres did not answer queries within {timeout:?}: {source}")]
    NotReady {
        timeout: Duration,
        #[source]
        source: sqlx::Error,
    },
}
