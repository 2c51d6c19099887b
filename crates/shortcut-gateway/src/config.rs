use std::path::PathBuf;

use clap::Parser;
use shortcut_storage::storage::DEFAULT_MAX_CONNECTIONS;
use shortcut_storage::StorageConfig;
use shortcut_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "SERVER_ADDRESS";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
pub const FILE_STORAGE_PATH_ENV: &str = "FILE_STORAGE_PATH";
pub const DATABASE_DSN_ENV: &str = "DATABASE_DSN";
pub const DATABASE_MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";

pub const DEFAULT_LISTEN_ADDR: &str = ":8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "shortcut-gateway")]
pub struct Config {
    /// Address to listen on. A bare `:port` listens on all interfaces.
    #[arg(short = 'a', long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Default log filter, overridden by `RUST_LOG`.
    #[arg(short = 'l', long, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Reserved for a file-backed store; currently unused.
    #[arg(short = 'f', long, env = FILE_STORAGE_PATH_ENV)]
    pub file_storage_path: Option<PathBuf>,

    /// PostgreSQL connection string. Leave empty to keep records in memory.
    #[arg(short = 'd', long, env = DATABASE_DSN_ENV)]
    pub database_dsn: Option<String>,

    #[arg(
        long,
        env = DATABASE_MAX_CONNECTIONS_ENV,
        default_value_t = DEFAULT_MAX_CONNECTIONS
    )]
    pub db_max_connections: u32,
}

impl Config {
    /// The address handed to the listener.
    pub fn bind_addr(&self) -> String {
        if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        }
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::builder()
            .database_dsn(self.database_dsn.clone())
            .max_connections(self.db_max_connections)
            .build()
    }
}
