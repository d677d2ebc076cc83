//! Repository for the `links` table.

use sqlx::PgPool;
use stackboard_core::link::LinkType;
use stackboard_core::types::RecordId;

use crate::models::link::{CreateLink, Link};

const COLUMNS: &str = "id, name, url, link_type, of_project, created_at, updated_at";

/// Provides CRUD operations for project links.
pub struct LinkRepo;

impl LinkRepo {
    pub async fn create(pool: &PgPool, input: &CreateLink) -> Result<Link, sqlx::Error> {
        let id = RecordId::generate();
        let query = format!(
            "INSERT INTO links (id, name, url, link_type, of_project)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(&input.url)
            .bind(input.link_type.as_str())
            .bind(input.of_project.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &RecordId) -> Result<Option<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE id = $1");
        sqlx::query_as::<_, Link>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List the links of a project, optionally restricted to one type.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: &RecordId,
        link_type: Option<LinkType>,
    ) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM links
             WHERE of_project = $1 AND ($2::TEXT IS NULL OR link_type = $2)
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(project_id.as_str())
            .bind(link_type.map(LinkType::as_str))
            .fetch_all(pool)
            .await
    }

    pub async fn update(pool: &PgPool, link: &Link) -> Result<Option<Link>, sqlx::Error> {
        let query = format!(
            "UPDATE links SET
                name = $2,
                url = $3,
                link_type = $4,
                of_project = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(link.id.as_str())
            .bind(&link.name)
            .bind(&link.url)
            .bind(link.link_type.as_str())
            .bind(link.of_project.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
