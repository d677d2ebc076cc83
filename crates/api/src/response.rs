//! Response envelope types for API handlers.
//!
//! Success bodies differ per resource: some endpoints return the record
//! directly, others wrap it with a confirmation message. These structs keep
//! each shape typed instead of ad-hoc `json!` values.

use serde::Serialize;
use stackboard_db::models::project::Project;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "data": T }`
#[derive(Debug, Serialize)]
pub struct MessageData<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

/// Body of a successful project update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdated {
    pub message: &'static str,
    pub updated_project: Project,
}

/// Body of a successful project delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeleted {
    pub message: &'static str,
    pub deleted_project: Project,
}
