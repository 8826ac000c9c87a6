//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p showcase-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use showcase_api::constants;
use showcase_api::setup::routes;
use showcase_api::state::AppState;
use showcase_core::{BaseConfig, Config, LogFormat, UploadConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Per-file upload limit used by tests, as configured.
pub const TEST_UPLOAD_LIMIT: &str = "1K";

/// API path prefix for tests (e.g. `/api/v1`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server and the upload temp dir it spools into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently spooled in the upload dir.
    pub fn spooled_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

pub fn test_config(tmp_dir: PathBuf) -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
            app_url: "https://cms.example.com".to_string(),
            http_concurrency_limit: 64,
            request_timeout_secs: 30,
            log_format: LogFormat::Compact,
        },
        uploads: UploadConfig {
            max_filesize_label: TEST_UPLOAD_LIMIT.to_string(),
            max_filesize_bytes: 1024,
            max_request_bytes: 64 * 1024,
            tmp_dir: Some(tmp_dir),
            blocked_extensions: vec!["php".to_string(), "exe".to_string()],
        },
    }
}

fn build_server(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config));
    let app = routes::setup_routes(&state.config, state.clone()).expect("Failed to build routes");
    TestServer::new(app.into_make_service()).expect("Failed to create test server")
}

pub fn setup_test_app() -> TestApp {
    let upload_dir = TempDir::new().expect("Failed to create upload dir");
    let server = build_server(test_config(upload_dir.path().to_path_buf()));
    TestApp { server, upload_dir }
}

/// App whose upload temp dir does not exist.
pub fn setup_test_app_without_tmp_dir() -> TestServer {
    let missing = std::env::temp_dir().join("showcase-test-missing-upload-dir");
    let _ = std::fs::remove_dir_all(&missing);
    build_server(test_config(missing))
}

/// App configured as production; error responses carry no details.
pub fn setup_production_test_app() -> TestApp {
    let upload_dir = TempDir::new().expect("Failed to create upload dir");
    let mut config = test_config(upload_dir.path().to_path_buf());
    config.base.environment = "production".to_string();
    config.base.cors_origins = vec!["https://cms.example.com".to_string()];
    let server = build_server(config);
    TestApp { server, upload_dir }
}
