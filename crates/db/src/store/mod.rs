//! The storage abstraction resource managers are written against.
//!
//! Managers hold an `Arc<dyn Store>` injected at construction, so the HTTP
//! layer never touches a process-wide connection handle and every manager
//! can be exercised against [`MemoryStore`].

use async_trait::async_trait;
use stackboard_core::link::LinkType;
use stackboard_core::types::RecordId;

use crate::error::StoreError;
use crate::models::architecture::{Architecture, CreateArchitecture};
use crate::models::link::{CreateLink, Link};
use crate::models::project::{CreateProject, Project};
use crate::models::team_member::{CreateTeamMember, TeamMember};

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Create/find/update/delete over the four resources.
///
/// Implementations assign ids and maintain `created_at`/`updated_at`.
/// `save_*` methods overwrite every mutable field of an existing record and
/// return `None` when the record has vanished. `delete_*` methods return
/// `false` when nothing was removed.
///
/// Implementations must enforce the same constraints:
///
/// - `Project.name` is unique.
/// - At most one architecture per project.
/// - `of_project` references an existing project.
/// - Deleting a project deletes everything that references it.
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap reachability probe for health checks.
    async fn ping(&self) -> Result<(), StoreError>;

    // --- projects ---
    async fn insert_project(&self, input: &CreateProject) -> Result<Project, StoreError>;
    async fn find_project(&self, id: &RecordId) -> Result<Option<Project>, StoreError>;
    async fn find_project_by_name(&self, name: &str) -> Result<Option<Project>, StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn save_project(&self, project: &Project) -> Result<Option<Project>, StoreError>;
    async fn delete_project(&self, id: &RecordId) -> Result<bool, StoreError>;

    // --- architectures ---
    async fn insert_architecture(
        &self,
        input: &CreateArchitecture,
    ) -> Result<Architecture, StoreError>;
    async fn find_architecture(&self, id: &RecordId) -> Result<Option<Architecture>, StoreError>;
    async fn find_architecture_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Option<Architecture>, StoreError>;
    async fn list_architectures(&self) -> Result<Vec<Architecture>, StoreError>;
    async fn save_architecture(
        &self,
        architecture: &Architecture,
    ) -> Result<Option<Architecture>, StoreError>;
    async fn delete_architecture(&self, id: &RecordId) -> Result<bool, StoreError>;

    // --- links ---
    async fn insert_link(&self, input: &CreateLink) -> Result<Link, StoreError>;
    async fn find_link(&self, id: &RecordId) -> Result<Option<Link>, StoreError>;
    async fn list_links_for_project(
        &self,
        project_id: &RecordId,
        link_type: Option<LinkType>,
    ) -> Result<Vec<Link>, StoreError>;
    async fn save_link(&self, link: &Link) -> Result<Option<Link>, StoreError>;
    async fn delete_link(&self, id: &RecordId) -> Result<bool, StoreError>;

    // --- team members ---
    async fn insert_team_member(&self, input: &CreateTeamMember)
        -> Result<TeamMember, StoreError>;
    async fn find_team_member(&self, id: &RecordId) -> Result<Option<TeamMember>, StoreError>;
    async fn list_team_members_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Vec<TeamMember>, StoreError>;
    async fn save_team_member(&self, member: &TeamMember)
        -> Result<Option<TeamMember>, StoreError>;
    async fn delete_team_member(&self, id: &RecordId) -> Result<bool, StoreError>;
}
