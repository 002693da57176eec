use super::MockBackend;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use ielts_prep::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    proxy::GenerationProxy,
    server,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

pub const ROUTE: &str = "/api/generative-ai";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            route: ROUTE.to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            max_body_bytes: 25 * 1024 * 1024,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: Some("test-api-key".to_string()),
            model: "gemini-2.5-flash".to_string(),
            request_timeout_secs: None,
        },
    }
}

/// Build the router around a mock backend
pub fn create_test_app(backend: MockBackend) -> Router {
    let proxy = GenerationProxy::new(Arc::new(backend));
    server::router(&create_test_config().server, proxy).unwrap()
}

/// POST a raw body to the generation route and decode the JSON reply
pub async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(ROUTE)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, body.to_string()).await
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  route: "/generate"
  cors_origins:
    - "http://localhost:3000"
  max_body_bytes: 1048576
  logs:
    level: "debug"
llm:
  base_url: "http://localhost:9999"
  api_key: "yaml-key"
  model: "gemini-2.0-flash"
  request_timeout_secs: 45
"#;
