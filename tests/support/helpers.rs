// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryStore};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use handbook_core::application::services::{ApplicationServices, Repositories};
use handbook_core::domain::module::DeletePolicy;
use handbook_core::infrastructure::util::DefaultSlugGenerator;
use handbook_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// Services wired to one shared in-memory store.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: InMemoryStore,
    pub clock: FixedClock,
}

impl TestContext {
    pub fn new(policy: DeletePolicy) -> Self {
        Self::with_store(InMemoryStore::new(), policy)
    }

    pub fn with_store(store: InMemoryStore, policy: DeletePolicy) -> Self {
        let clock = FixedClock::default();
        let repos = Repositories {
            module_write: Arc::new(store.clone()),
            module_read: Arc::new(store.clone()),
            article_write: Arc::new(store.clone()),
            article_read: Arc::new(store.clone()),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(clock.clone()),
            Arc::new(DefaultSlugGenerator),
            policy,
        ));
        Self {
            services,
            store,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(
            state,
            RouterOptions {
                allowed_origins: vec!["http://localhost:3000".into()],
                rate_limit: None,
            },
        )
    }
}

pub fn make_test_router() -> (axum::Router, InMemoryStore) {
    let ctx = TestContext::new(DeletePolicy::default());
    (ctx.router(), ctx.store)
}

pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
