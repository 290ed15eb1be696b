#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use linkpress::domain::repositories::LinkRepository;
use linkpress::infrastructure::persistence::MemoryLinkRepository;
use linkpress::routes::router;
use linkpress::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// State backed by a fresh in-memory store.
pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryLinkRepository::new()))
}

pub fn create_state_with(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repository, 1)
}

/// Full application router over a fresh in-memory store.
pub fn create_test_app() -> Router {
    router(create_test_state())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

pub async fn insert_link(pool: &PgPool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target) VALUES ($1, $2)")
        .bind(code)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_link_created_at(pool: &PgPool, code: &str, target: &str, offset_secs: i64) {
    sqlx::query(
        "INSERT INTO links (code, target, created_at) VALUES ($1, $2, now() + make_interval(secs => $3))",
    )
    .bind(code)
    .bind(target)
    .bind(offset_secs as f64)
    .execute(pool)
    .await
    .unwrap();
}
