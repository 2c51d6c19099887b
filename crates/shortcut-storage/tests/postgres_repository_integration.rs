use std::sync::Arc;

use shortcut_storage::{
    Backend, PostgresRepository, Repository, Storage, StorageConfig, StorageError, UrlRecord,
};
use shortcut_test_infra::postgres::{PostgresConfig, PostgresServer};

struct Fixture {
    _postgres: PostgresServer,
    url: String,
    repo: PostgresRepository,
}

impl Fixture {
    async fn start() -> Self {
        let postgres = PostgresServer::new(PostgresConfig::builder().build())
            .await
            .expect("start postgres");
        let url = postgres.database_url().to_string();
        let pool = postgres.pool(5).await.expect("connect postgres");

        let repo = PostgresRepository::new(pool);
        repo.ensure_schema().await.expect("create schema");

        Self {
            _postgres: postgres,
            url,
            repo,
        }
    }
}

fn record(url: &str, code: &str) -> UrlRecord {
    UrlRecord::new(url, code)
}

#[tokio::test]
async fn create_and_lookup() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .create(record("https://example.com", "ex1"))
        .await
        .unwrap();

    let got = fixture.repo.lookup("ex1").await.unwrap();
    assert_eq!(got, "https://example.com");
}

#[tokio::test]
async fn lookup_missing_is_not_found() {
    let fixture = Fixture::start().await;

    let err = fixture.repo.lookup("missing").await.unwrap_err();
    assert_eq!(err, StorageError::NotFound("missing".to_string()));

    let err = fixture.repo.lookup("").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_conflicts_when_code_already_exists() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .create(record("https://a.com", "dup"))
        .await
        .unwrap();

    let err = fixture
        .repo
        .create(record("https://b.com", "dup"))
        .await
        .unwrap_err();

    assert_eq!(err, StorageError::AlreadyExists("dup".to_string()));
    assert_eq!(fixture.repo.lookup("dup").await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn create_ignores_supplied_id() {
    let fixture = Fixture::start().await;

    let mut first = record("https://one.example", "one");
    first.id = 7;
    let mut second = record("https://two.example", "two");
    second.id = 7;

    fixture.repo.create(first).await.unwrap();
    fixture.repo.create(second).await.unwrap();

    let ids: Vec<i32> = sqlx::query_scalar("SELECT id FROM urls ORDER BY id")
        .fetch_all(fixture.repo.pool())
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn concurrent_creates_on_same_code_have_one_winner() {
    let fixture = Fixture::start().await;
    let repo = Arc::new(fixture.repo.clone());
    let mut handles = vec![];

    for i in 0..8u64 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let url = format!("https://example{}.com", i);
            repo.create(record(&url, "race")).await.map(|()| url)
        }));
    }

    let mut winners = vec![];
    for handle in handles {
        match handle.await.unwrap() {
            Ok(url) => winners.push(url),
            Err(err) => assert!(err.is_already_exists(), "unexpected error: {err}"),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(fixture.repo.lookup("race").await.unwrap(), winners[0]);
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .create(record("https://example.com", "kept"))
        .await
        .unwrap();

    // Simulates a restart against a database that already has the table.
    fixture.repo.ensure_schema().await.unwrap();

    let config = StorageConfig::builder()
        .database_dsn(Some(fixture.url.clone()))
        .max_connections(2)
        .build();
    let storage = Storage::initialize(&config).await.unwrap();

    assert_eq!(storage.backend(), Backend::Postgres);
    assert_eq!(storage.lookup("kept").await.unwrap(), "https://example.com");
    storage.close().await;
}

#[tokio::test]
async fn initialize_creates_missing_table() {
    let fixture = Fixture::start().await;

    sqlx::query("DROP TABLE urls")
        .execute(fixture.repo.pool())
        .await
        .unwrap();

    let config = StorageConfig::builder()
        .database_dsn(Some(fixture.url.clone()))
        .build();
    let storage = Storage::initialize(&config).await.unwrap();

    storage
        .create(record("https://example.com", "fresh"))
        .await
        .unwrap();
    assert_eq!(storage.lookup("fresh").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn same_url_under_second_code_conflicts() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .create(record("https://example.com", "one"))
        .await
        .unwrap();

    // urls.url is UNIQUE, so the second code is rejected.
    let err = fixture
        .repo
        .create(record("https://example.com", "two"))
        .await
        .unwrap_err();
    assert_eq!(err, StorageError::AlreadyExists("two".to_string()));

    assert!(fixture.repo.lookup("two").await.unwrap_err().is_not_found());
    assert_eq!(fixture.repo.lookup("one").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn missing_table_surfaces_internal_errors() {
    let fixture = Fixture::start().await;

    sqlx::query("DROP TABLE urls")
        .execute(fixture.repo.pool())
        .await
        .unwrap();

    let err = fixture.repo.lookup("ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::Internal(_)), "got {err:?}");

    let err = fixture
        .repo
        .create(record("https://example.com", "ex1"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Internal(_)), "got {err:?}");

    fixture.repo.ensure_schema().await.unwrap();
    assert!(fixture.repo.lookup("ex1").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn closed_pool_surfaces_internal_errors() {
    let fixture = Fixture::start().await;

    fixture.repo.close().await;

    let err = fixture.repo.lookup("ex1").await.unwrap_err();
    assert!(matches!(err, StorageError::Internal(_)), "got {err:?}");

    let err = fixture
        .repo
        .create(record("https://example.com", "ex1"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Internal(_)), "got {err:?}");
}
