//! Route definitions for the `/architecture` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::architecture;
use crate::state::AppState;

/// Routes mounted at `/architecture`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /get_project_architecture/{id}   -> get_for_project
/// PATCH  /{id}                            -> update
/// DELETE /{id}                            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(architecture::list).post(architecture::create))
        .route(
            "/get_project_architecture/{id}",
            get(architecture::get_for_project),
        )
        .route(
            "/{id}",
            patch(architecture::update).delete(architecture::delete),
        )
}
