use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use shortcut_core::{Repository, Result, UrlRecord};
use tracing::info;
use typed_builder::TypedBuilder;

use crate::error::InitError;
use crate::memory::InMemoryRepository;
use crate::postgres::PostgresRepository;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Settings that decide which backend [`Storage::initialize`] brings up.
#[derive(Debug, Clone, TypedBuilder)]
pub struct StorageConfig {
    /// PostgreSQL connection string. Blank or absent selects the memory backend.
    #[builder(default, setter(into))]
    database_dsn: Option<String>,
    #[builder(default = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,
}

impl StorageConfig {
    /// The configured DSN, if it is non-blank.
    pub fn database_dsn(&self) -> Option<&str> {
        self.database_dsn
            .as_deref()
            .map(str::trim)
            .filter(|dsn| !dsn.is_empty())
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// The backend this configuration selects.
    pub fn backend(&self) -> Backend {
        match self.database_dsn() {
            Some(_) => Backend::Postgres,
            None => Backend::Memory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Postgres,
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Postgres => write!(f, "postgres"),
        }
    }
}

/// The active storage backend, chosen once at startup.
#[derive(Debug)]
pub enum Storage {
    Memory(InMemoryRepository),
    Postgres(PostgresRepository),
}

impl Storage {
    /// Brings up the backend selected by `config`.
    ///
    /// With a DSN this connects to PostgreSQL and creates the `urls` table if
    /// needed; any failure is returned rather than falling back to memory.
    /// Without one it returns an empty memory backend.
    pub async fn initialize(config: &StorageConfig) -> std::result::Result<Self, InitError> {
        let storage = match config.database_dsn() {
            Some(dsn) => {
                let repository =
                    PostgresRepository::connect(dsn, config.max_connections()).await?;
                Storage::Postgres(repository)
            }
            None => Storage::Memory(InMemoryRepository::new()),
        };

        info!(backend = %storage.backend(), "storage initialized");
        Ok(storage)
    }

    pub fn backend(&self) -> Backend {
        match self {
            Storage::Memory(_) => Backend::Memory,
            Storage::Postgres(_) => Backend::Postgres,
        }
    }

    /// Releases backend resources. A no-op for the memory backend.
    pub async fn close(&self) {
        if let Storage::Postgres(repository) = self {
            repository.close().await;
        }
    }
}

#[async_trait]
impl Repository for Storage {
    async fn lookup(&self, short_code: &str) -> Result<String> {
        match self {
            Storage::Memory(repository) => repository.lookup(short_code).await,
            Storage::Postgres(repository) => repository.lookup(short_code).await,
        }
    }

    async fn create(&self, record: UrlRecord) -> Result<()> {
        match self {
            Storage::Memory(repository) => repository.create(record).await,
            Storage::Postgres(repository) => repository.create(record).await,
        }
    }
}
