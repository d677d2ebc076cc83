//! Repository for the `team_members` table.

use sqlx::PgPool;
use stackboard_core::types::RecordId;

use crate::models::team_member::{CreateTeamMember, TeamMember};

const COLUMNS: &str = "id, name, role, of_project, created_at, updated_at";

/// Provides CRUD operations for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let id = RecordId::generate();
        let query = format!(
            "INSERT INTO team_members (id, name, role, of_project)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(input.role.as_str())
            .bind(input.of_project.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: &RecordId,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: &RecordId,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM team_members WHERE of_project = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id.as_str())
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        member: &TeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = $2,
                role = $3,
                of_project = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(member.id.as_str())
            .bind(&member.name)
            .bind(member.role.as_str())
            .bind(member.of_project.as_str())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: &RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
