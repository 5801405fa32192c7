//! Shared test harness: builds the app against an unreachable database so
//! the embedded-content routes (and error paths) can be exercised without
//! infrastructure.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use server_core::{server::build_app, Config};

/// Nothing listens on the discard port; DB-backed routes fail fast and
/// surface the retryable fetch error.
const UNREACHABLE_DB: &str = "postgres://postgres@127.0.0.1:9/directory";

pub fn test_config() -> Config {
    Config {
        database_url: UNREACHABLE_DB.to_string(),
        port: 0,
        submission_webhook_url: None,
        donate_url: None,
        cache_ttl_secs: 300,
    }
}

pub fn test_app(config: Config) -> Router {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_lazy(&config.database_url)
        .expect("valid test database url");
    build_app(pool, config)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub async fn post_json(
    app: Router,
    uri: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
