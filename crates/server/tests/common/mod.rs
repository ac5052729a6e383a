//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock conversion engine injected, enabling end-to-end testing
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reformat_core::testing::MockEngine;
use reformat_core::{
    Config, ConversionEngine, EngineConfig, IntakeConfig, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES,
};
use reformat_server::api::create_router;
use reformat_server::state::AppState;

/// Boundary used for hand-built multipart bodies.
const BOUNDARY: &str = "reformat-test-boundary";

/// Test fixture for E2E testing with a mock conversion engine.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock engine - inspect dispatches, inject errors
    pub engine: Arc<MockEngine>,
}

/// Response from a JSON test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Response from a conversion request: raw bytes plus headers
#[derive(Debug)]
pub struct DownloadResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl DownloadResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }
}

impl TestFixture {
    /// Create a new test fixture with the default upload ceiling.
    pub fn new() -> Self {
        Self::with_max_upload_bytes(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Create a test fixture with a custom upload ceiling.
    pub fn with_max_upload_bytes(max_upload_bytes: u64) -> Self {
        let engine = Arc::new(MockEngine::new());

        let config = Config {
            engine: EngineConfig {
                url: "http://conversion-engine.test/convert".to_string(),
                timeout_secs: 5,
            },
            server: ServerConfig::default(),
            intake: IntakeConfig { max_upload_bytes },
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::clone(&engine) as Arc<dyn ConversionEngine>,
        ));
        let router = create_router(state);

        Self { router, engine }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send_json(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send_json(request).await
    }

    /// Send a multipart POST carrying one `file` field.
    ///
    /// An empty `content_type` omits the part's Content-Type header, so
    /// the server sees an empty declared type and falls back to the
    /// extension.
    pub async fn post_file(
        &self,
        path: &str,
        file_name: &str,
        content_type: &str,
        contents: &[u8],
    ) -> DownloadResponse {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        if !content_type.is_empty() {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();

        self.send_raw(request).await
    }

    /// Send a multipart POST with no `file` field at all.
    pub async fn post_empty_multipart(&self, path: &str) -> DownloadResponse {
        let body = format!("--{}--\r\n", BOUNDARY);
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();
        self.send_raw(request).await
    }

    async fn send_json(&self, request: Request<Body>) -> TestResponse {
        let response = self.send_raw(request).await;
        TestResponse {
            status: response.status,
            body: response.body_json(),
        }
    }

    async fn send_raw(&self, request: Request<Body>) -> DownloadResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        DownloadResponse {
            status,
            headers,
            bytes,
        }
    }
}
