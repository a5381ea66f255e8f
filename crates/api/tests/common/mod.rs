//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) over an in-memory object store, and provides request
//! helpers. Admin helpers send the test admin secret; the `get` and
//! `*_unauthenticated` helpers do not.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_storage::{ObjectStore, StorageError};

/// The admin secret the test config uses.
pub const TEST_ADMIN_PASSWORD: &str = "test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
    }
}

/// In-memory object store so upload tests can assert exactly what was
/// (or was not) written.
#[derive(Default)]
pub struct MemStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemStore {
    async fn put(
        &self,
        name: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes);
        Ok(format!("http://files.test/{name}"))
    }
}

/// Build the application router over the given pool and a fresh
/// in-memory store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(MemStore::default()))
}

/// Build the application router over the given pool and store handle,
/// so the test can inspect stored objects afterwards.
pub fn build_test_app_with_store(pool: PgPool, store: Arc<MemStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };
    build_app_router(state, &config)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Body is not JSON: {e}"))
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value, auth: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if auth {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {TEST_ADMIN_PASSWORD}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// GET without authentication (public endpoints).
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// POST a JSON body with the admin secret.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, true)).await
}

/// PUT a JSON body with the admin secret.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, true)).await
}

/// DELETE with the admin secret.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {TEST_ADMIN_PASSWORD}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// POST a JSON body with no Authorization header.
pub async fn post_json_unauthenticated(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, false)).await
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "folio-test-boundary";

/// One part of a multipart request body.
pub struct MultipartField<'a> {
    pub name: &'a str,
    /// `Some((filename, content_type))` for file parts, `None` for text.
    pub file: Option<(&'a str, &'a str)>,
    pub data: Vec<u8>,
}

/// POST a multipart body with the admin secret.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: Vec<MultipartField<'_>>,
) -> Response<Body> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match field.file {
            Some((filename, content_type)) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n",
                        field.name
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field.name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(&field.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {TEST_ADMIN_PASSWORD}"))
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}
