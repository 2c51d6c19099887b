use async_trait::async_trait;
use shortcut_core::{Repository, Result, StorageError, UrlRecord};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, error, info};

use crate::error::InitError;

const SCHEMA: &str = include_str!("../ddl/postgres/urls.sql");

/// PostgreSQL implementation of the repository contract.
///
/// Records live in the `urls` table. Uniqueness of `short_url` is enforced by
/// the table's unique constraint alone; `create` never checks before
/// inserting, so concurrent writers are arbitrated by the database.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository from an existing connection pool.
    ///
    /// The schema is not touched; call [`ensure_schema`](Self::ensure_schema)
    /// if the table may be missing.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool and makes sure the `urls` table exists.
    pub async fn connect(
        database_dsn: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, InitError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_dsn)
            .await
            .map_err(InitError::Connect)?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Creates the `urls` table unless it already exists.
    pub async fn ensure_schema(&self) -> std::result::Result<(), InitError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(InitError::Schema)?;

        info!("urls table ready");
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes every pooled connection, waiting for checked-out ones.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

/// Coarse classification used in logs. Callers only ever see
/// [`StorageError::Internal`].
fn failure_class(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::PoolTimedOut => "timeout",
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => "unavailable",
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => "invalid_data",
        _ => "query",
    }
}

fn internal(operation: &'static str, short_code: &str, err: sqlx::Error) -> StorageError {
    error!(
        operation,
        short_code,
        failure = failure_class(&err),
        error = %err,
        "postgres operation failed"
    );
    StorageError::Internal(err.to_string())
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn lookup(&self, short_code: &str) -> Result<String> {
        let url: Option<String> = sqlx::query_scalar(
            r#"
            SELECT url
            FROM urls
            WHERE short_url = $1
            LIMIT 1
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| internal("lookup", short_code, err))?;

        url.ok_or_else(|| {
            debug!(short_code, "short code not in postgres");
            StorageError::NotFound(short_code.to_owned())
        })
    }

    async fn create(&self, record: UrlRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (url, short_url)
            VALUES ($1, $2)
            "#,
        )
        .bind(&record.original_url)
        .bind(&record.short_code)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                debug!(
                    short_code = %record.short_code,
                    constraint = err
                        .as_database_error()
                        .and_then(|db| db.constraint())
                        .unwrap_or_default(),
                    "insert rejected by unique constraint"
                );
                Err(StorageError::AlreadyExists(record.short_code))
            }
            Err(err) => Err(internal("create", &record.short_code, err)),
        }
    }
}
