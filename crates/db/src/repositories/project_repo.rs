//! Repository for the `projects` table.

use sqlx::PgPool;
use stackboard_core::project::ProjectStatus;
use stackboard_core::types::RecordId;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, deadline, description, status, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `active`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let id = RecordId::generate();
        let query = format!(
            "INSERT INTO projects (id, name, deadline, description, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'active'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(input.deadline)
            .bind(&input.description)
            .bind(input.status.map(ProjectStatus::as_str))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its identifier.
    pub async fn find_by_id(pool: &PgPool, id: &RecordId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Find a project by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Overwrite the mutable fields of a project and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(pool: &PgPool, project: &Project) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                deadline = $3,
                description = $4,
                status = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project.id.as_str())
            .bind(&project.name)
            .bind(project.deadline)
            .bind(&project.description)
            .bind(project.status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    ///
    /// Architecture, link and team member rows referencing the project are
    /// removed by their `ON DELETE CASCADE` foreign keys.
    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
