//! Route definitions for the `/link` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::link;
use crate::state::AppState;

/// Routes mounted at `/link`.
///
/// `GET /{id}` takes a project id; `PATCH` and `DELETE` take a link id.
///
/// ```text
/// POST   /                  -> create
/// GET    /linkType/{id}     -> list_by_type
/// GET    /{id}              -> list_for_project
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(link::create))
        .route("/linkType/{id}", get(link::list_by_type))
        .route(
            "/{id}",
            get(link::list_for_project)
                .patch(link::update)
                .delete(link::delete),
        )
}
