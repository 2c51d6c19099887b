use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shortcut_core::{Repository, Result, StorageError, UrlRecord};
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// Records live for the lifetime of the process and are never evicted.
/// `create` goes through the entry API, so the existence check and the insert
/// run under the same shard lock and racing writers cannot both win.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.storage.len()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn lookup(&self, short_code: &str) -> Result<String> {
        match self.storage.get(short_code) {
            Some(record) => Ok(record.original_url.clone()),
            None => {
                trace!(short_code, "short code not in memory");
                Err(StorageError::NotFound(short_code.to_owned()))
            }
        }
    }

    async fn create(&self, record: UrlRecord) -> Result<()> {
        match self.storage.entry(record.short_code.clone()) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists(record.short_code)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}
