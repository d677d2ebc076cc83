//! Architecture entity model and DTOs.
//!
//! A project has at most one architecture document.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use stackboard_core::error::CoreError;
use stackboard_core::types::{RecordId, Timestamp};
use stackboard_core::validation::ensure_not_blank;

use super::decode_id;

/// A row from the `architectures` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Architecture {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub of_project: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for Architecture {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            of_project: decode_id(row, "of_project")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Architecture {
    /// Apply the non-`None` fields of `patch` and re-validate the result.
    pub fn merge(mut self, patch: UpdateArchitecture) -> Result<Self, CoreError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(of_project) = patch.of_project {
            self.of_project = of_project;
        }
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("description", &self.description)?;
        Ok(self)
    }
}

/// DTO for creating an architecture document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArchitecture {
    pub name: String,
    pub description: String,
    pub of_project: RecordId,
}

/// DTO for updating an architecture document. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArchitecture {
    pub name: Option<String>,
    pub description: Option<String>,
    pub of_project: Option<RecordId>,
}
