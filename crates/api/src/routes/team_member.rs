//! Route definitions for the `/teamMember` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::team_member;
use crate::state::AppState;

/// Routes mounted at `/teamMember`.
///
/// ```text
/// POST   /                          -> create
/// GET    /projectTeamMembers/{id}   -> list_for_project
/// GET    /{id}                      -> get_by_id
/// PATCH  /{id}                      -> update
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(team_member::create))
        .route(
            "/projectTeamMembers/{id}",
            get(team_member::list_for_project),
        )
        .route(
            "/{id}",
            get(team_member::get_by_id)
                .patch(team_member::update)
                .delete(team_member::delete),
        )
}
