//! Shared helpers for router-level tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use trackd::server::{self, AppState};
use tracker_lib::{DeportmentCatalog, IssueStore};

/// A fresh service router over an empty store and the built-in catalog.
pub fn app() -> Router {
    server::app(AppState::new(IssueStore::new(DeportmentCatalog::builtin())))
}

/// Send one request through the router.
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(request).await.unwrap()
}

/// Read and parse a JSON response body.
pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an issue and return its JSON representation.
pub async fn seed_issue(
    router: &Router,
    title: &str,
    category_id: &str,
    assignee_name: Option<&str>,
) -> Value {
    let mut payload = json!({
        "title": title,
        "category_id": category_id,
    });
    if let Some(assignee) = assignee_name {
        payload["assignee_name"] = json!(assignee);
    }

    let response = send(router, "POST", "/issues", Some(payload)).await;
    assert_eq!(response.status(), 201, "seed create failed for {title}");
    json_body(response).await
}
