//! Handlers for the `/architecture` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stackboard_db::models::architecture::Architecture;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{MessageData, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/architecture
///
/// An empty collection is wrapped as `{message, data: []}`.
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let architectures = state.architectures().list().await?;
    if architectures.is_empty() {
        return Ok(Json(MessageData {
            message: "No Architectures found",
            data: architectures,
        })
        .into_response());
    }
    Ok(Json(architectures).into_response())
}

/// GET /api/v1/architecture/get_project_architecture/{id}
pub async fn get_for_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> AppResult<Json<Architecture>> {
    Ok(Json(state.architectures().get_for_project(&project_id).await?))
}

/// POST /api/v1/architecture
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Architecture>)> {
    let architecture = state.architectures().create(body).await?;
    Ok((StatusCode::CREATED, Json(architecture)))
}

/// PATCH /api/v1/architecture/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Architecture>> {
    Ok(Json(state.architectures().update(&id, body).await?))
}

/// DELETE /api/v1/architecture/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.architectures().delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Architecture deleted successfully",
    }))
}
