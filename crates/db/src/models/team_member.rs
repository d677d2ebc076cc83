//! Team member entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use stackboard_core::error::CoreError;
use stackboard_core::team::TeamRole;
use stackboard_core::types::{RecordId, Timestamp};
use stackboard_core::validation::ensure_not_blank;

use super::{decode_enum, decode_id};

/// A row from the `team_members` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub role: TeamRole,
    pub of_project: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for TeamMember {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            name: row.try_get("name")?,
            role: decode_enum(row, "role")?,
            of_project: decode_id(row, "of_project")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TeamMember {
    /// Apply the non-`None` fields of `patch` and re-validate the result.
    pub fn merge(mut self, patch: UpdateTeamMember) -> Result<Self, CoreError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(of_project) = patch.of_project {
            self.of_project = of_project;
        }
        ensure_not_blank("name", &self.name)?;
        Ok(self)
    }
}

/// DTO for adding a team member to a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMember {
    pub name: String,
    pub role: TeamRole,
    pub of_project: RecordId,
}

/// DTO for updating a team member. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub role: Option<TeamRole>,
    pub of_project: Option<RecordId>,
}
