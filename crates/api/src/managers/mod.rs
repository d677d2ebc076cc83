//! Resource managers.
//!
//! Each manager owns the lifecycle of one resource and runs every request
//! through the same ordered pipeline, returning at the first failing step:
//!
//! 1. ID-shape check on path parameters.
//! 2. Existence check for the addressed record.
//! 3. Empty-body and required-field checks.
//! 4. Typed deserialization of the body (enum and type constraints).
//! 5. Uniqueness and referential checks against storage.
//! 6. A single storage mutation or query.
//!
//! Managers never catch storage faults; they propagate with `?` and are
//! shaped by [`crate::error::AppError`].

pub mod architecture;
pub mod link;
pub mod project;
pub mod team_member;

pub use architecture::ArchitectureManager;
pub use link::LinkManager;
pub use project::ProjectManager;
pub use team_member::TeamMemberManager;

use stackboard_core::error::CoreError;
use stackboard_core::types::RecordId;
use stackboard_db::models::project::Project;
use stackboard_db::Store;

use crate::error::AppResult;

/// Load the project `id` references, or fail with `NotFound(message)`.
async fn require_project(store: &dyn Store, id: &RecordId, message: &str) -> AppResult<Project> {
    store
        .find_project(id)
        .await?
        .ok_or_else(|| CoreError::NotFound(message.to_string()).into())
}
