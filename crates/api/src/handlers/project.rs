//! Handlers for the `/project` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stackboard_db::models::project::Project;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{MessageResponse, ProjectDeleted, ProjectUpdated};
use crate::state::AppState;

/// GET /api/v1/project
///
/// An empty collection is reported as a message, not an empty array.
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let projects = state.projects().list().await?;
    if projects.is_empty() {
        return Ok(Json(MessageResponse {
            message: "No projects found",
        })
        .into_response());
    }
    Ok(Json(projects).into_response())
}

/// GET /api/v1/project/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Project>> {
    Ok(Json(state.projects().get(&id).await?))
}

/// POST /api/v1/project
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.projects().create(body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/v1/project/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<ProjectUpdated>> {
    let updated_project = state.projects().update(&id, body).await?;
    Ok(Json(ProjectUpdated {
        message: "Project updated successfully",
        updated_project,
    }))
}

/// DELETE /api/v1/project/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ProjectDeleted>> {
    let deleted_project = state.projects().delete(&id).await?;
    Ok(Json(ProjectDeleted {
        message: "Project deleted successfully",
        deleted_project,
    }))
}
