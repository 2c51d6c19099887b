//! HTTP front end of the Shortcut URL shortener.
//!
//! Both endpoints live on `/` and take JSON bodies: `GET` resolves a short
//! code, `POST` registers a new one. Each handler performs exactly one storage
//! call through the [`Repository`](shortcut_core::Repository) held in
//! [`AppState`].

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod shutdown;
pub mod state;

pub use app::App;
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
