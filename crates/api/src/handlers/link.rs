//! Handlers for the `/link` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stackboard_db::models::link::Link;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody, QueryParams};
use crate::query::LinkTypeQuery;
use crate::response::{MessageData, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/link/{id} where `id` is a project id.
pub async fn list_for_project(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> AppResult<Json<Vec<Link>>> {
    Ok(Json(state.links().list_for_project(&project_id).await?))
}

/// GET /api/v1/link/linkType/{id}?type=
pub async fn list_by_type(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
    QueryParams(query): QueryParams<LinkTypeQuery>,
) -> AppResult<Json<Vec<Link>>> {
    let links = state
        .links()
        .list_by_type(&project_id, query.link_type.as_deref())
        .await?;
    Ok(Json(links))
}

/// POST /api/v1/link
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Link>)> {
    let link = state.links().create(body).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// PATCH /api/v1/link/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageData<Link>>> {
    let data = state.links().update(&id, body).await?;
    Ok(Json(MessageData {
        message: "Link updated successfully",
        data,
    }))
}

/// DELETE /api/v1/link/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.links().delete(&id).await?;
    Ok(Json(MessageResponse {
        message: "Link deleted successfully",
    }))
}
