//! Handlers for the `/teamMember` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stackboard_db::models::team_member::TeamMember;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{MessageData, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/teamMember/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<TeamMember>> {
    Ok(Json(state.team_members().get(&id).await?))
}

/// GET /api/v1/teamMember/projectTeamMembers/{id}
pub async fn list_for_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.team_members().list_for_project(&project_id).await?))
}

/// POST /api/v1/teamMember
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<MessageData<TeamMember>>)> {
    let data = state.team_members().create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageData {
            message: "Team member created successfully",
            data,
        }),
    ))
}

/// PATCH /api/v1/teamMember/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageData<TeamMember>>> {
    let data = state.team_members().update(&id, body).await?;
    Ok(Json(MessageData {
        message: "TeamMember was updated",
        data,
    }))
}

/// DELETE /api/v1/teamMember/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.team_members().delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "TeamMember deleted successfully",
    }))
}
