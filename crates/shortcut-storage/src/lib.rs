//! Storage backends for the Shortcut URL shortener.
//!
//! Two interchangeable [`Repository`] implementations live here, an in-memory
//! map and a PostgreSQL table, plus the [`Storage`] facade that picks one of
//! them at startup.
//!
//! ```rust
//! use shortcut_storage::{Repository, Storage, StorageConfig, UrlRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // No DSN configured, so the memory backend is selected.
//! let storage = Storage::initialize(&StorageConfig::builder().build()).await?;
//!
//! storage.create(UrlRecord::new("https://example.com", "ex1")).await?;
//! assert_eq!(storage.lookup("ex1").await?, "https://example.com");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod storage;

pub use error::InitError;
pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;
pub use shortcut_core::{Repository, StorageError, UrlRecord};
pub use storage::{Backend, Storage, StorageConfig};
