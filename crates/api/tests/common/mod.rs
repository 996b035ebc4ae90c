#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use mobdir_api::config::{CorsOrigins, LogFormat, ServerConfig};
use mobdir_api::router::build_app_router;
use mobdir_api::state::AppState;
use mobdir_db::JsonFileStore;

/// A data directory that lives as long as the test.
pub struct TestContext {
    _dir: TempDir,
    pub data_file: PathBuf,
    pub store: Arc<JsonFileStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data_file = dir.path().join("data.json");
        let store = Arc::new(JsonFileStore::new(&data_file));
        Self {
            _dir: dir,
            data_file,
            store,
        }
    }

    /// Build the app with the default (any-origin) CORS policy.
    pub fn app(&self) -> Router {
        self.app_with_origins(CorsOrigins::Any)
    }

    /// Build the app with a specific CORS policy. All apps built from one
    /// context share the same store and therefore the same writer lock.
    pub fn app_with_origins(&self, cors_origins: CorsOrigins) -> Router {
        let config = test_config(self.data_file.clone(), cors_origins);
        let state = AppState {
            store: Arc::clone(&self.store),
        };
        build_app_router(state, &config)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(data_file: PathBuf, cors_origins: CorsOrigins) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins,
        data_file,
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(json.to_string()),
        Some("application/json"),
    )
    .await
}

/// POST an arbitrary body with an optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &'static str,
    content_type: Option<&str>,
) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body), content_type).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder.body(body).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid add payload for `number`.
pub fn entry_payload(number: &str) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "place": "Gandhipuram",
        "district": "Coimbatore",
        "state": "Tamil Nadu",
    })
}
