//! Link lifecycle.

use std::sync::Arc;

use stackboard_core::error::CoreError;
use stackboard_core::link::LinkType;
use stackboard_core::types::RecordId;
use stackboard_core::validation::{ensure_body, parse_body, parse_id, require_fields, JsonObject};
use stackboard_db::models::link::{CreateLink, Link, UpdateLink};
use stackboard_db::Store;

use super::require_project;
use crate::error::AppResult;

const REQUIRED_FIELDS: &[&str] = &["name", "ofProject", "type", "url"];

const EMPTY_BODY: &str = "Request body cannot be empty";
const MISSING_FIELDS: &str = "Missing required fields";
const PROJECT_NOT_FOUND: &str = "Project not found";
const LINK_PROJECT_NOT_FOUND: &str = "Link Project not found";
const INVALID_ID: &str = "Invalid link ID";
// The by-project reads name the project id here, not "Invalid link ID".
const INVALID_PROJECT_ID: &str = "Invalid project ID";
const NOT_FOUND: &str = "Link not found";
const MISSING_QUERY: &str = "Missing Query <type>";
const INVALID_QUERY: &str = "Invalid Query <type>";

pub struct LinkManager {
    store: Arc<dyn Store>,
}

impl LinkManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Every link of `project_id`, possibly none.
    pub async fn list_for_project(&self, project_id: &str) -> AppResult<Vec<Link>> {
        let project_id = self.existing_project(project_id).await?;
        Ok(self.store.list_links_for_project(&project_id, None).await?)
    }

    /// Links of `project_id` whose type equals the `?type=` query value.
    pub async fn list_by_type(
        &self,
        project_id: &str,
        link_type: Option<&str>,
    ) -> AppResult<Vec<Link>> {
        let project_id = self.existing_project(project_id).await?;

        let raw = link_type
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::MissingQuery(MISSING_QUERY.into()))?;
        let link_type: LinkType = raw
            .parse()
            .map_err(|_| CoreError::InvalidQuery(INVALID_QUERY.into()))?;

        Ok(self
            .store
            .list_links_for_project(&project_id, Some(link_type))
            .await?)
    }

    pub async fn create(&self, body: JsonObject) -> AppResult<Link> {
        ensure_body(&body, EMPTY_BODY)?;
        require_fields(&body, REQUIRED_FIELDS, MISSING_FIELDS)?;
        let input: CreateLink = parse_body(body)?;

        require_project(self.store.as_ref(), &input.of_project, PROJECT_NOT_FOUND).await?;

        let link = self.store.insert_link(&input).await?;
        tracing::info!(link_id = %link.id, project_id = %link.of_project, "Link created");
        Ok(link)
    }

    pub async fn update(&self, id: &str, body: JsonObject) -> AppResult<Link> {
        let id = parse_id(id, INVALID_ID)?;
        let existing = self.find(&id).await?;
        ensure_body(&body, EMPTY_BODY)?;
        let patch: UpdateLink = parse_body(body)?;

        if let Some(target) = patch.of_project.as_ref() {
            if *target != existing.of_project {
                require_project(self.store.as_ref(), target, PROJECT_NOT_FOUND).await?;
            }
        }

        let merged = existing.merge(patch)?;
        let link = self
            .store
            .save_link(&merged)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(link_id = %link.id, "Link updated");
        Ok(link)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, INVALID_ID)?;
        self.find(&id).await?;

        if !self.store.delete_link(&id).await? {
            return Err(CoreError::NotFound(NOT_FOUND.into()).into());
        }
        tracing::info!(link_id = %id, "Link deleted");
        Ok(())
    }

    async fn find(&self, id: &RecordId) -> AppResult<Link> {
        self.store
            .find_link(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()).into())
    }

    async fn existing_project(&self, project_id: &str) -> AppResult<RecordId> {
        let project_id = parse_id(project_id, INVALID_PROJECT_ID)?;
        require_project(self.store.as_ref(), &project_id, LINK_PROJECT_NOT_FOUND).await?;
        Ok(project_id)
    }
}
