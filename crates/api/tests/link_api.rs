//! HTTP-level integration tests for the `/link` resource.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create_project, delete, get, patch_json, post_json, unused_id};
use serde_json::{json, Value};

async fn create_link(app: &Router, project_id: &str, link_type: &str) -> Value {
    let response = post_json(
        app,
        "/api/v1/link",
        json!({
            "name": format!("{link_type} link"),
            "url": format!("https://example.com/{link_type}"),
            "type": link_type,
            "ofProject": project_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_returns_201_with_type_field() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;

    let link = create_link(&app, &project_id, "deploy").await;
    assert_eq!(link["type"], "deploy");
    assert_eq!(link["ofProject"], project_id);
}

#[tokio::test]
async fn create_with_empty_body_or_missing_fields_returns_400() {
    let app = common::build_test_app();

    let empty = post_json(&app, "/api/v1/link", json!({})).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(empty).await["message"], "Request body cannot be empty");

    let missing = post_json(&app, "/api/v1/link", json!({"name": "Docs", "type": "doc"})).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(missing).await["message"], "Missing required fields");
}

#[tokio::test]
async fn create_for_unknown_project_returns_404() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/link",
        json!({"name": "Docs", "url": "https://x.test", "type": "doc", "ofProject": unused_id()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Project not found");
}

#[tokio::test]
async fn list_for_project_returns_array() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;
    let other_id = create_project(&app, "Beta").await;
    let doc = create_link(&app, &project_id, "doc").await;
    create_link(&app, &other_id, "dev").await;

    let response = get(&app, &format!("/api/v1/link/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([doc]));
}

#[tokio::test]
async fn list_for_project_without_links_is_empty_array() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;

    let response = get(&app, &format!("/api/v1/link/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_for_unknown_project_returns_404() {
    let app = common::build_test_app();

    let invalid = get(&app, "/api/v1/link/zzz").await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(invalid).await["message"], "Invalid project ID");

    let unknown = get(&app, &format!("/api/v1/link/{}", unused_id())).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(unknown).await["message"], "Link Project not found");
}

#[tokio::test]
async fn filter_by_type_returns_only_matching_links() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;
    let doc = create_link(&app, &project_id, "doc").await;
    create_link(&app, &project_id, "dev").await;

    let response = get(&app, &format!("/api/v1/link/linkType/{project_id}?type=doc")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([doc]));

    let none = get(&app, &format!("/api/v1/link/linkType/{project_id}?type=deploy")).await;
    assert_eq!(none.status(), StatusCode::OK);
    assert_eq!(body_json(none).await, json!([]));
}

#[tokio::test]
async fn filter_by_type_rejects_missing_and_invalid_query() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;

    let missing = get(&app, &format!("/api/v1/link/linkType/{project_id}")).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let json = body_json(missing).await;
    assert_eq!(json["message"], "Missing Query <type>");
    assert_eq!(json["errorCode"], "MISSING_QUERY");

    let invalid = get(&app, &format!("/api/v1/link/linkType/{project_id}?type=bogus")).await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let json = body_json(invalid).await;
    assert_eq!(json["message"], "Invalid Query <type>");
    assert_eq!(json["errorCode"], "INVALID_QUERY");
}

#[tokio::test]
async fn update_wraps_record_in_data() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;
    let link = create_link(&app, &project_id, "doc").await;
    let id = link["_id"].as_str().unwrap();

    let response = patch_json(
        &app,
        &format!("/api/v1/link/{id}"),
        json!({"url": "https://docs.example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Link updated successfully");
    assert_eq!(json["data"]["url"], "https://docs.example.com");
    assert_eq!(json["data"]["name"], link["name"]);
    assert_eq!(json["data"]["type"], "doc");
}

#[tokio::test]
async fn update_rejects_empty_body_and_bad_type() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;
    let link = create_link(&app, &project_id, "doc").await;
    let uri = format!("/api/v1/link/{}", link["_id"].as_str().unwrap());

    let empty = patch_json(&app, &uri, json!({})).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(empty).await["message"], "Request body cannot be empty");

    let bad_type = patch_json(&app, &uri, json!({"type": "wiki"})).await;
    assert_eq!(bad_type.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(bad_type).await["errorCode"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_and_delete_with_invalid_or_unknown_id() {
    let app = common::build_test_app();

    let invalid = patch_json(&app, "/api/v1/link/nope", json!({"name": "X"})).await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(invalid).await["message"], "Invalid link ID");

    let unknown = delete(&app, &format!("/api/v1/link/{}", unused_id())).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(unknown).await["message"], "Link not found");
}

#[tokio::test]
async fn delete_returns_message_then_404() {
    let app = common::build_test_app();
    let project_id = create_project(&app, "Alpha").await;
    let link = create_link(&app, &project_id, "dev").await;
    let uri = format!("/api/v1/link/{}", link["_id"].as_str().unwrap());

    let first = delete(&app, &uri).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        body_json(first).await,
        json!({"message": "Link deleted successfully"})
    );

    let second = delete(&app, &uri).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}
