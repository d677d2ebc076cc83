use async_trait::async_trait;
use stackboard_core::link::LinkType;
use stackboard_core::types::RecordId;

use super::Store;
use crate::error::StoreError;
use crate::models::architecture::{Architecture, CreateArchitecture};
use crate::models::link::{CreateLink, Link};
use crate::models::project::{CreateProject, Project};
use crate::models::team_member::{CreateTeamMember, TeamMember};
use crate::repositories::{ArchitectureRepo, LinkRepo, ProjectRepo, TeamMemberRepo};
use crate::DbPool;

/// PostgreSQL-backed [`Store`], delegating to the repository structs.
///
/// Uniqueness, referential integrity and cascading deletes are enforced by
/// the schema in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn insert_project(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn find_project(&self, id: &RecordId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_project_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_name(&self.pool, name).await?)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn save_project(&self, project: &Project) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, project).await?)
    }

    async fn delete_project(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn insert_architecture(
        &self,
        input: &CreateArchitecture,
    ) -> Result<Architecture, StoreError> {
        Ok(ArchitectureRepo::create(&self.pool, input).await?)
    }

    async fn find_architecture(&self, id: &RecordId) -> Result<Option<Architecture>, StoreError> {
        Ok(ArchitectureRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_architecture_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Option<Architecture>, StoreError> {
        Ok(ArchitectureRepo::find_by_project(&self.pool, project_id).await?)
    }

    async fn list_architectures(&self) -> Result<Vec<Architecture>, StoreError> {
        Ok(ArchitectureRepo::list(&self.pool).await?)
    }

    async fn save_architecture(
        &self,
        architecture: &Architecture,
    ) -> Result<Option<Architecture>, StoreError> {
        Ok(ArchitectureRepo::update(&self.pool, architecture).await?)
    }

    async fn delete_architecture(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(ArchitectureRepo::delete(&self.pool, id).await?)
    }

    async fn insert_link(&self, input: &CreateLink) -> Result<Link, StoreError> {
        Ok(LinkRepo::create(&self.pool, input).await?)
    }

    async fn find_link(&self, id: &RecordId) -> Result<Option<Link>, StoreError> {
        Ok(LinkRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_links_for_project(
        &self,
        project_id: &RecordId,
        link_type: Option<LinkType>,
    ) -> Result<Vec<Link>, StoreError> {
        Ok(LinkRepo::list_by_project(&self.pool, project_id, link_type).await?)
    }

    async fn save_link(&self, link: &Link) -> Result<Option<Link>, StoreError> {
        Ok(LinkRepo::update(&self.pool, link).await?)
    }

    async fn delete_link(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(LinkRepo::delete(&self.pool, id).await?)
    }

    async fn insert_team_member(
        &self,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, StoreError> {
        Ok(TeamMemberRepo::create(&self.pool, input).await?)
    }

    async fn find_team_member(&self, id: &RecordId) -> Result<Option<TeamMember>, StoreError> {
        Ok(TeamMemberRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_team_members_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Vec<TeamMember>, StoreError> {
        Ok(TeamMemberRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn save_team_member(
        &self,
        member: &TeamMember,
    ) -> Result<Option<TeamMember>, StoreError> {
        Ok(TeamMemberRepo::update(&self.pool, member).await?)
    }

    async fn delete_team_member(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(TeamMemberRepo::delete(&self.pool, id).await?)
    }
}
