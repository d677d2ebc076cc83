//! Team member lifecycle.

use std::sync::Arc;

use stackboard_core::error::CoreError;
use stackboard_core::types::RecordId;
use stackboard_core::validation::{ensure_body, parse_body, parse_id, require_fields, JsonObject};
use stackboard_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use stackboard_db::Store;

use super::require_project;
use crate::error::AppResult;

const REQUIRED_FIELDS: &[&str] = &["name", "ofProject", "role"];

const EMPTY_BODY: &str = "Request body cannot be empty";
const MISSING_FIELDS: &str = "Missing required fields";
const PROJECT_NOT_FOUND: &str = "Project not found";
const INVALID_ID: &str = "Invalid TeamMember ID";
const INVALID_PROJECT_ID: &str = "Invalid Project ID";
const NOT_FOUND: &str = "TeamMember not found";

pub struct TeamMemberManager {
    store: Arc<dyn Store>,
}

impl TeamMemberManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: &str) -> AppResult<TeamMember> {
        let id = parse_id(id, INVALID_ID)?;
        self.find(&id).await
    }

    pub async fn list_for_project(&self, project_id: &str) -> AppResult<Vec<TeamMember>> {
        let project_id = parse_id(project_id, INVALID_PROJECT_ID)?;
        require_project(self.store.as_ref(), &project_id, PROJECT_NOT_FOUND).await?;
        Ok(self.store.list_team_members_for_project(&project_id).await?)
    }

    pub async fn create(&self, body: JsonObject) -> AppResult<TeamMember> {
        ensure_body(&body, EMPTY_BODY)?;
        require_fields(&body, REQUIRED_FIELDS, MISSING_FIELDS)?;
        let input: CreateTeamMember = parse_body(body)?;

        require_project(self.store.as_ref(), &input.of_project, PROJECT_NOT_FOUND).await?;

        let member = self.store.insert_team_member(&input).await?;
        tracing::info!(
            team_member_id = %member.id,
            project_id = %member.of_project,
            role = %member.role,
            "Team member created",
        );
        Ok(member)
    }

    /// Partial update. An empty body leaves the record unchanged.
    pub async fn update(&self, id: &str, body: JsonObject) -> AppResult<TeamMember> {
        let id = parse_id(id, INVALID_ID)?;
        let existing = self.find(&id).await?;
        let patch: UpdateTeamMember = parse_body(body)?;

        if let Some(target) = patch.of_project.as_ref() {
            if *target != existing.of_project {
                require_project(self.store.as_ref(), target, PROJECT_NOT_FOUND).await?;
            }
        }

        let merged = existing.merge(patch)?;
        let member = self
            .store
            .save_team_member(&merged)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(team_member_id = %member.id, "Team member updated");
        Ok(member)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, INVALID_ID)?;
        self.find(&id).await?;

        if !self.store.delete_team_member(&id).await? {
            return Err(CoreError::NotFound(NOT_FOUND.into()).into());
        }
        tracing::info!(team_member_id = %id, "Team member deleted");
        Ok(())
    }

    async fn find(&self, id: &RecordId) -> AppResult<TeamMember> {
        self.store
            .find_team_member(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()).into())
    }
}
