//! Project lifecycle.

use std::sync::Arc;

use stackboard_core::error::CoreError;
use stackboard_core::types::RecordId;
use stackboard_core::validation::{ensure_body, parse_body, parse_id, require_fields, JsonObject};
use stackboard_db::models::project::{CreateProject, Project, UpdateProject};
use stackboard_db::Store;

use crate::error::AppResult;

const REQUIRED_FIELDS: &[&str] = &["name", "deadline", "description"];

const BODY_REQUIRED: &str = "Body is required";
const MISSING_FIELDS: &str = "Missing fields in the body";
const DUPLICATE_NAME: &str = "Project name must be unique";
const INVALID_ID: &str = "Invalid project ID";
const NOT_FOUND: &str = "Project not found";
const EMPTY_UPDATE: &str = "Request body cannot be empty";

pub struct ProjectManager {
    store: Arc<dyn Store>,
}

impl ProjectManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        Ok(self.store.list_projects().await?)
    }

    pub async fn get(&self, id: &str) -> AppResult<Project> {
        let id = parse_id(id, INVALID_ID)?;
        self.find(&id).await
    }

    pub async fn create(&self, body: JsonObject) -> AppResult<Project> {
        ensure_body(&body, BODY_REQUIRED)?;
        require_fields(&body, REQUIRED_FIELDS, MISSING_FIELDS)?;
        let input: CreateProject = parse_body(body)?;

        self.ensure_name_available(&input.name).await?;

        let project = self.store.insert_project(&input).await?;
        tracing::info!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    pub async fn update(&self, id: &str, body: JsonObject) -> AppResult<Project> {
        let id = parse_id(id, INVALID_ID)?;
        let existing = self.find(&id).await?;
        ensure_body(&body, EMPTY_UPDATE)?;
        let patch: UpdateProject = parse_body(body)?;

        if let Some(name) = patch.name.as_deref() {
            if name != existing.name {
                self.ensure_name_available(name).await?;
            }
        }

        let merged = existing.merge(patch)?;
        let project = self
            .store
            .save_project(&merged)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }

    /// Delete a project and everything that references it. Returns the
    /// deleted record.
    pub async fn delete(&self, id: &str) -> AppResult<Project> {
        let id = parse_id(id, INVALID_ID)?;
        let existing = self.find(&id).await?;

        if !self.store.delete_project(&id).await? {
            return Err(CoreError::NotFound(NOT_FOUND.into()).into());
        }
        tracing::info!(project_id = %id, "Project deleted");
        Ok(existing)
    }

    async fn find(&self, id: &RecordId) -> AppResult<Project> {
        super::require_project(self.store.as_ref(), id, NOT_FOUND).await
    }

    async fn ensure_name_available(&self, name: &str) -> AppResult<()> {
        if self.store.find_project_by_name(name).await?.is_some() {
            return Err(CoreError::DuplicateName(DUPLICATE_NAME.into()).into());
        }
        Ok(())
    }
}
