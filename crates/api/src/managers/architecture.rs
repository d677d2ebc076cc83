//! Architecture lifecycle. A project has at most one architecture document.

use std::sync::Arc;

use stackboard_core::error::CoreError;
use stackboard_core::types::RecordId;
use stackboard_core::validation::{ensure_body, parse_body, parse_id, require_fields, JsonObject};
use stackboard_db::models::architecture::{Architecture, CreateArchitecture, UpdateArchitecture};
use stackboard_db::Store;

use super::require_project;
use crate::error::AppResult;

const REQUIRED_FIELDS: &[&str] = &["name", "description", "ofProject"];

const NO_BODY: &str = "No body provided";
const MISSING_FIELDS: &str = "Missing required fields";
const PROJECT_NOT_FOUND: &str = "Project not found";
const ALREADY_EXISTS: &str = "Architecture already exists for this project";
const INVALID_ID: &str = "Invalid architecture ID";
const INVALID_PROJECT_ID: &str = "Invalid project ID";
const NOT_FOUND: &str = "Architecture not found";
const NOT_FOUND_FOR_PROJECT: &str = "Architecture not found for this project";

pub struct ArchitectureManager {
    store: Arc<dyn Store>,
}

impl ArchitectureManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Architecture>> {
        Ok(self.store.list_architectures().await?)
    }

    /// The architecture document of `project_id`.
    pub async fn get_for_project(&self, project_id: &str) -> AppResult<Architecture> {
        let project_id = parse_id(project_id, INVALID_PROJECT_ID)?;
        require_project(self.store.as_ref(), &project_id, PROJECT_NOT_FOUND).await?;

        self.store
            .find_architecture_for_project(&project_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND_FOR_PROJECT.into()).into())
    }

    pub async fn create(&self, body: JsonObject) -> AppResult<Architecture> {
        ensure_body(&body, NO_BODY)?;
        require_fields(&body, REQUIRED_FIELDS, MISSING_FIELDS)?;
        let input: CreateArchitecture = parse_body(body)?;

        require_project(self.store.as_ref(), &input.of_project, PROJECT_NOT_FOUND).await?;
        self.ensure_slot_free(&input.of_project).await?;

        let architecture = self.store.insert_architecture(&input).await?;
        tracing::info!(
            architecture_id = %architecture.id,
            project_id = %architecture.of_project,
            "Architecture created",
        );
        Ok(architecture)
    }

    /// Partial update. An empty body leaves the record unchanged.
    pub async fn update(&self, id: &str, body: JsonObject) -> AppResult<Architecture> {
        let id = parse_id(id, INVALID_ID)?;
        let existing = self.find(&id).await?;
        let patch: UpdateArchitecture = parse_body(body)?;

        if let Some(target) = patch.of_project.as_ref() {
            if *target != existing.of_project {
                require_project(self.store.as_ref(), target, PROJECT_NOT_FOUND).await?;
                self.ensure_slot_free(target).await?;
            }
        }

        let merged = existing.merge(patch)?;
        let architecture = self
            .store
            .save_architecture(&merged)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()))?;
        tracing::info!(architecture_id = %architecture.id, "Architecture updated");
        Ok(architecture)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, INVALID_ID)?;
        self.find(&id).await?;

        if !self.store.delete_architecture(&id).await? {
            return Err(CoreError::NotFound(NOT_FOUND.into()).into());
        }
        tracing::info!(architecture_id = %id, "Architecture deleted");
        Ok(())
    }

    async fn find(&self, id: &RecordId) -> AppResult<Architecture> {
        self.store
            .find_architecture(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(NOT_FOUND.into()).into())
    }

    async fn ensure_slot_free(&self, project_id: &RecordId) -> AppResult<()> {
        if self
            .store
            .find_architecture_for_project(project_id)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists(ALREADY_EXISTS.into()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use serde_json::json;
    use stackboard_db::models::project::{CreateProject, Project};
    use stackboard_db::MemoryStore;

    use super::*;
    use crate::error::AppError;

    async fn setup() -> (ArchitectureManager, Project) {
        let store = Arc::new(MemoryStore::new());
        let project = store
            .insert_project(&CreateProject {
                name: "Alpha".into(),
                deadline: Utc::now(),
                description: "d".into(),
                status: None,
            })
            .await
            .unwrap();
        (ArchitectureManager::new(store), project)
    }

    fn body_for(project: &RecordId) -> JsonObject {
        json!({"name": "Hexagonal", "description": "Ports and adapters", "ofProject": project})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn second_architecture_for_project_is_rejected() {
        let (manager, project) = setup().await;
        manager.create(body_for(&project.id)).await.unwrap();

        let err = manager.create(body_for(&project.id)).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::AlreadyExists(msg)) if msg == ALREADY_EXISTS);
    }

    #[tokio::test]
    async fn create_for_unknown_project_is_not_found() {
        let (manager, _) = setup().await;
        let err = manager
            .create(body_for(&RecordId::generate()))
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound(msg)) if msg == PROJECT_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_with_empty_body_reports_no_body() {
        let (manager, _) = setup().await;
        let err = manager.create(JsonObject::new()).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::EmptyBody(msg)) if msg == NO_BODY);
    }

    #[tokio::test]
    async fn get_for_project_distinguishes_missing_project_and_missing_document() {
        let (manager, project) = setup().await;

        let err = manager
            .get_for_project(RecordId::generate().as_str())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound(msg)) if msg == PROJECT_NOT_FOUND);

        let err = manager
            .get_for_project(project.id.as_str())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound(msg)) if msg == NOT_FOUND_FOR_PROJECT);
    }

    #[tokio::test]
    async fn empty_update_is_a_no_op() {
        let (manager, project) = setup().await;
        let created = manager.create(body_for(&project.id)).await.unwrap();

        let updated = manager
            .update(created.id.as_str(), JsonObject::new())
            .await
            .unwrap();
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.of_project, created.of_project);
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let (manager, project) = setup().await;
        let created = manager.create(body_for(&project.id)).await.unwrap();

        let patch = json!({"name": "  "}).as_object().cloned().unwrap();
        let err = manager
            .update(created.id.as_str(), patch)
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }
}
