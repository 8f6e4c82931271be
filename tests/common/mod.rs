//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use soundgate_router::config::AppConfig;
use soundgate_router::HttpServer;

/// Send a GET through the server's router in-process.
pub async fn get(server: &HttpServer, uri: &str) -> (StatusCode, String) {
    let response = server
        .app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Default config with the router section tweaked by `f`.
#[allow(dead_code)]
pub fn config_with(f: impl FnOnce(&mut AppConfig)) -> AppConfig {
    let mut config = AppConfig::default();
    f(&mut config);
    config
}
