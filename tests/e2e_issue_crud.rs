mod common;

use axum::http::StatusCode;
use common::{app, json_body, seed_issue, send};
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_endpoints() {
    let router = app();

    let response = send(&router, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "I am Root"}));

    let response = send(&router, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_create_issue_success() {
    let router = app();

    let response = send(
        &router,
        "POST",
        "/issues",
        Some(json!({
            "title": "t1",
            "category_id": "111",
            "assignee_name": "alice",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let issue = json_body(response).await;
    assert_eq!(issue["title"], "t1");
    assert_eq!(issue["category_id"], "111");
    assert_eq!(issue["assignee_name"], "alice");
    assert!(!issue["id"].as_str().unwrap().is_empty());
    assert_eq!(issue["is_deleted"], false);
}

#[tokio::test]
async fn test_create_issue_invalid_deportment() {
    let router = app();

    let response = send(
        &router,
        "POST",
        "/issues",
        Some(json!({
            "title": "invalid",
            "category_id": "999",
            "assignee_name": "anyone",
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_create_issue_blank_title_rejected() {
    let router = app();

    let response = send(
        &router,
        "POST",
        "/issues",
        Some(json!({"title": "   ", "category_id": "111"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid_request");
}

#[tokio::test]
async fn test_create_issue_malformed_json_rejected() {
    let router = app();

    let response = send(
        &router,
        "POST",
        "/issues",
        Some(json!({"category_id": "111"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid_request");
}

#[tokio::test]
async fn test_get_issue_by_id() {
    let router = app();
    let created = seed_issue(&router, "Fetch me", "222", None).await;
    let id = created["id"].as_str().unwrap();

    let response = send(&router, "GET", &format!("/issues/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let issue = json_body(response).await;
    assert_eq!(issue["id"], *id);
    assert_eq!(issue["title"], "Fetch me");
    // Unassigned issues omit the assignee field entirely.
    assert!(issue.get("assignee_name").is_none());
}

#[tokio::test]
async fn test_get_missing_issue_not_found() {
    let router = app();

    let response = send(&router, "GET", "/issues/it-missing", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_list_issues_insertion_order() {
    let router = app();
    let first = seed_issue(&router, "First", "111", None).await;
    let second = seed_issue(&router, "Second", "222", None).await;

    let response = send(&router, "GET", "/issues", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items = json_body(response).await;
    let ids: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![first["id"].as_str().unwrap(), second["id"].as_str().unwrap()]
    );
}

#[tokio::test]
async fn test_update_issue_partial() {
    let router = app();
    let created = seed_issue(&router, "Original", "111", Some("alice")).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &router,
        "PUT",
        &format!("/issues/{id}"),
        Some(json!({"title": "Renamed"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let issue = json_body(response).await;
    assert_eq!(issue["title"], "Renamed");
    assert_eq!(issue["category_id"], "111");
    assert_eq!(issue["assignee_name"], "alice");
}

#[tokio::test]
async fn test_update_issue_invalid_deportment() {
    let router = app();
    let created = seed_issue(&router, "Keep category", "111", None).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &router,
        "PUT",
        &format!("/issues/{id}"),
        Some(json!({"category_id": "999"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "invalid_request");

    // Failed update left the record unchanged.
    let response = send(&router, "GET", &format!("/issues/{id}"), None).await;
    assert_eq!(json_body(response).await["category_id"], "111");
}

#[tokio::test]
async fn test_update_missing_issue_not_found() {
    let router = app();

    let response = send(
        &router,
        "PUT",
        "/issues/it-missing",
        Some(json!({"title": "X"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_soft_delete_flow() {
    let router = app();
    let created = seed_issue(&router, "Delete me", "111", None).await;
    let kept = seed_issue(&router, "Keep me", "111", None).await;
    let id = created["id"].as_str().unwrap();

    let response = send(&router, "DELETE", &format!("/issues/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from direct lookup.
    let response = send(&router, "GET", &format!("/issues/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Gone from the listing, the other issue remains.
    let response = send(&router, "GET", "/issues", None).await;
    let items = json_body(response).await;
    let ids: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![kept["id"].as_str().unwrap()]);

    // Gone from search.
    let response = send(&router, "GET", "/issues/search", None).await;
    let result = json_body(response).await;
    assert_eq!(result["meta"]["total"], 1);
}

#[tokio::test]
async fn test_double_delete_not_found() {
    let router = app();
    let created = seed_issue(&router, "Delete twice", "111", None).await;
    let id = created["id"].as_str().unwrap();

    let first = send(&router, "DELETE", &format!("/issues/{id}"), None).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = send(&router, "DELETE", &format!("/issues/{id}"), None).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(second).await["error"], "not_found");
}

#[tokio::test]
async fn test_deportments_listing() {
    let router = app();

    let response = send(&router, "GET", "/deportments", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    let ids: Vec<&str> = entries.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["111", "222", "333"]);
}

#[tokio::test]
async fn test_get_deportment() {
    let router = app();

    let response = send(&router, "GET", "/deportments/222", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], "Finance");
    assert_eq!(body["description"], "Finance & Accounts");

    let response = send(&router, "GET", "/deportments/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_deleted_issue_fields_stay_out_of_every_read_path() {
    let router = app();
    let created = seed_issue(&router, "Ghost", "333", Some("bob")).await;
    let id = created["id"].as_str().unwrap();
    send(&router, "DELETE", &format!("/issues/{id}"), None).await;

    let update = send(
        &router,
        "PUT",
        &format!("/issues/{id}"),
        Some(json!({"title": "Back from the dead"})),
    )
    .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let search = send(
        &router,
        "GET",
        "/issues/search?assignee_name=bob",
        None,
    )
    .await;
    let result: Value = json_body(search).await;
    assert_eq!(result["meta"]["total"], 0);
}
