//! HTTP-level integration tests for the `/project` resource.
//!
//! Requests go straight to the router via `tower::ServiceExt::oneshot`,
//! backed by the in-memory store.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, create_project, delete, get, patch_json, post_json, send_raw, unused_id};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_returns_201_with_record() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/project",
        json!({
            "name": "Alpha",
            "deadline": "2026-12-31T00:00:00Z",
            "description": "First project",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alpha");
    assert_eq!(json["status"], "active");
    assert_eq!(json["_id"].as_str().unwrap().len(), 24);
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[tokio::test]
async fn create_with_empty_body_returns_400() {
    let app = common::build_test_app();

    for raw in ["", "{}"] {
        let response = send_raw(&app, Method::POST, "/api/v1/project", raw).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Body is required");
        assert_eq!(json["errorCode"], "EMPTY_BODY");
    }
}

#[tokio::test]
async fn create_with_missing_field_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/project",
        json!({"name": "Alpha", "description": "no deadline"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing fields in the body");
    assert_eq!(json["errorCode"], "MISSING_FIELDS");
}

#[tokio::test]
async fn create_with_empty_string_field_counts_as_missing() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/project",
        json!({"name": "", "deadline": "2026-12-31", "description": "d"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "MISSING_FIELDS");
}

#[tokio::test]
async fn duplicate_name_yields_201_then_400() {
    let app = common::build_test_app();
    let body = json!({"name": "Alpha", "deadline": "2026-12-31", "description": "d"});

    let first = post_json(&app, "/api/v1/project", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&app, "/api/v1/project", body).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = body_json(second).await;
    assert_eq!(json["message"], "Project name must be unique");
    assert_eq!(json["errorCode"], "DUPLICATE_NAME");
}

#[tokio::test]
async fn invalid_status_returns_validation_error() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/project",
        json!({"name": "Alpha", "deadline": "2026-12-31", "description": "d", "status": "archived"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_projects_returns_message() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/project").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "No projects found"}));
}

#[tokio::test]
async fn list_returns_array_of_projects() {
    let app = common::build_test_app();
    create_project(&app, "P1").await;
    create_project(&app, "P2").await;

    let response = get(&app, "/api/v1/project").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["P1", "P2"]);
}

#[tokio::test]
async fn get_with_invalid_id_returns_400() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/project/not-an-id").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid project ID");
    assert_eq!(json["errorCode"], "INVALID_ID");
}

#[tokio::test]
async fn get_with_unknown_id_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, &format!("/api/v1/project/{}", unused_id())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Project not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_merges_partial_fields() {
    let app = common::build_test_app();
    let id = create_project(&app, "Alpha").await;
    let before = body_json(get(&app, &format!("/api/v1/project/{id}")).await).await;

    let response = patch_json(&app, &format!("/api/v1/project/{id}"), json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Project updated successfully");
    let updated = &json["updatedProject"];
    assert_eq!(updated["name"], "X");
    assert_eq!(updated["_id"], before["_id"]);
    assert_eq!(updated["deadline"], before["deadline"]);
    assert_eq!(updated["description"], before["description"]);
    assert_eq!(updated["status"], before["status"]);
    assert_eq!(updated["createdAt"], before["createdAt"]);
}

#[tokio::test]
async fn update_with_empty_body_returns_400() {
    let app = common::build_test_app();
    let id = create_project(&app, "Alpha").await;

    let response = patch_json(&app, &format!("/api/v1/project/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Request body cannot be empty");
}

#[tokio::test]
async fn update_unknown_project_returns_404_before_body_check() {
    let app = common::build_test_app();
    let response = patch_json(&app, &format!("/api/v1/project/{}", unused_id()), json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_invalid_deadline_returns_400() {
    let app = common::build_test_app();
    let id = create_project(&app, "Alpha").await;

    let response = patch_json(
        &app,
        &format!("/api/v1/project/{id}"),
        json!({"deadline": "next tuesday"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errorCode"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_returns_200_then_404() {
    let app = common::build_test_app();
    let id = create_project(&app, "Alpha").await;

    let first = delete(&app, &format!("/api/v1/project/{id}")).await;
    assert_eq!(first.status(), StatusCode::OK);
    let json = body_json(first).await;
    assert_eq!(json["message"], "Project deleted successfully");
    assert_eq!(json["deletedProject"]["_id"], id);

    let second = delete(&app, &format!("/api/v1/project/{id}")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_read_delete_round_trip() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/project",
        json!({"name": "Round", "deadline": "2026-06-01", "description": "trip", "status": "inactive"}),
    )
    .await;
    let created = body_json(response).await;
    let id = created["_id"].as_str().unwrap().to_string();

    let fetched = body_json(get(&app, &format!("/api/v1/project/{id}")).await).await;
    assert_eq!(fetched, created);

    delete(&app, &format!("/api/v1/project/{id}")).await;
    let response = get(&app, &format!("/api/v1/project/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_project_removes_its_dependents() {
    let app = common::build_test_app();
    let id = create_project(&app, "Alpha").await;

    let member = post_json(
        &app,
        "/api/v1/teamMember",
        json!({"name": "Ada", "role": "back-end", "ofProject": id}),
    )
    .await;
    let member_id = body_json(member).await["data"]["_id"]
        .as_str()
        .unwrap()
        .to_string();

    delete(&app, &format!("/api/v1/project/{id}")).await;

    let response = get(&app, &format!("/api/v1/teamMember/{member_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
