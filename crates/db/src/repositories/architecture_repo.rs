//! Repository for the `architectures` table.

use sqlx::PgPool;
use stackboard_core::types::RecordId;

use crate::models::architecture::{Architecture, CreateArchitecture};

const COLUMNS: &str = "id, name, description, of_project, created_at, updated_at";

/// Provides CRUD operations for architecture documents.
pub struct ArchitectureRepo;

impl ArchitectureRepo {
    /// Insert a new architecture document, returning the created row.
    ///
    /// Fails with a unique violation on `uq_architectures_of_project` if the
    /// project already has one.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArchitecture,
    ) -> Result<Architecture, sqlx::Error> {
        let id = RecordId::generate();
        let query = format!(
            "INSERT INTO architectures (id, name, description, of_project)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Architecture>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.of_project.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &RecordId,
    ) -> Result<Option<Architecture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM architectures WHERE id = $1");
        sqlx::query_as::<_, Architecture>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Find the architecture document of a project, if any.
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: &RecordId,
    ) -> Result<Option<Architecture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM architectures WHERE of_project = $1");
        sqlx::query_as::<_, Architecture>(&query)
            .bind(project_id.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Architecture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM architectures ORDER BY created_at, id");
        sqlx::query_as::<_, Architecture>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the mutable fields and bump `updated_at`.
    pub async fn update(
        pool: &PgPool,
        architecture: &Architecture,
    ) -> Result<Option<Architecture>, sqlx::Error> {
        let query = format!(
            "UPDATE architectures SET
                name = $2,
                description = $3,
                of_project = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Architecture>(&query)
            .bind(architecture.id.as_str())
            .bind(&architecture.name)
            .bind(&architecture.description)
            .bind(architecture.of_project.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM architectures WHERE id = $1")
            .bind(id.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
