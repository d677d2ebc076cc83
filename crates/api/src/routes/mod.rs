pub mod architecture;
pub mod health;
pub mod link;
pub mod project;
pub mod team_member;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /project                                         list, create
/// /project/{id}                                    get, update, delete
///
/// /architecture                                    list, create
/// /architecture/{id}                               update, delete
/// /architecture/get_project_architecture/{id}      by project
///
/// /link                                            create
/// /link/{id}                                       by project (GET), update, delete
/// /link/linkType/{id}?type=                        by project and type
///
/// /teamMember                                      create
/// /teamMember/{id}                                 get, update, delete
/// /teamMember/projectTeamMembers/{id}              by project
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/project", project::router())
        .nest("/architecture", architecture::router())
        .nest("/link", link::router())
        .nest("/teamMember", team_member::router())
}
