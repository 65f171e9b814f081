// tests/support/helpers.rs
use std::str::FromStr;
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use kawaraban::application::ports::image_store::ImageStore;
use kawaraban::application::ports::time::Clock;
use kawaraban::application::ports::util::SlugGenerator;
use kawaraban::application::services::ApplicationServices;
use kawaraban::domain::author::AuthorRepository;
use kawaraban::domain::category::CategoryRepository;
use kawaraban::domain::comment::CommentRepository;
use kawaraban::domain::post::PostRepository;
use kawaraban::infrastructure::database;
use kawaraban::infrastructure::repositories::{
    SqliteAuthorRepository, SqliteCategoryRepository, SqliteCommentRepository,
    SqlitePostRepository,
};
use kawaraban::infrastructure::time::SystemClock;
use kawaraban::infrastructure::util::WhitespaceSlugGenerator;
use kawaraban::presentation::http::{routes::build_router, state::HttpState};

use super::mocks;

pub fn test_blocklist() -> Vec<String> {
    vec!["badword1".into(), "badword2".into(), "badword3".into()]
}

/// A single-connection pool, so every query in a test shares the one
/// in-memory database. Migrations run here, which also seeds the
/// reference authors and categories.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("parse sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("run migrations");
    pool
}

/// Full router over a fresh in-memory database; only the image store is
/// substituted so nothing lands on disk.
pub async fn make_test_router() -> axum::Router {
    let pool = memory_pool().await;

    let posts: Arc<dyn PostRepository> = Arc::new(SqlitePostRepository::new(pool.clone()));
    let authors: Arc<dyn AuthorRepository> = Arc::new(SqliteAuthorRepository::new(pool.clone()));
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(SqliteCommentRepository::new(pool.clone()));
    let images: Arc<dyn ImageStore> = Arc::new(mocks::CapturingImageStore::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(WhitespaceSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        posts,
        authors,
        categories,
        comments,
        images,
        clock,
        slugger,
        10,
        test_blocklist(),
    ));

    build_router(HttpState { services })
}

/// Reads the body as JSON, panicking with the raw payload when it is not.
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "expected json body, got: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}
