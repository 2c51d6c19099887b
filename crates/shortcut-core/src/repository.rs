use crate::error::Result;
use crate::record::UrlRecord;
use async_trait::async_trait;

/// Persistence contract implemented by every storage backend.
///
/// Implementations must keep `short_code` unique: of any number of `create`
/// calls for the same code, including concurrent ones, exactly one succeeds.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Resolves a short code to the original URL.
    ///
    /// Returns [`StorageError::NotFound`](crate::StorageError::NotFound) if no
    /// record has that code. The empty string is a valid key that never matches.
    async fn lookup(&self, short_code: &str) -> Result<String>;

    /// Stores a new record.
    ///
    /// Returns [`StorageError::AlreadyExists`](crate::StorageError::AlreadyExists)
    /// if the short code is taken, in which case nothing is written.
    async fn create(&self, record: UrlRecord) -> Result<()>;
}
