//! Core types and traits for the Shortcut URL shortener.
//!
//! This crate provides the record model, the storage error taxonomy and the
//! [`Repository`] contract shared by the storage backends and the gateway.

pub mod error;
pub mod record;
pub mod repository;

pub use error::{Result, StorageError};
pub use record::UrlRecord;
pub use repository::Repository;
