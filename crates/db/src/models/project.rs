//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use stackboard_core::error::CoreError;
use stackboard_core::project::{deserialize_deadline, deserialize_optional_deadline, ProjectStatus};
use stackboard_core::types::{RecordId, Timestamp};
use stackboard_core::validation::ensure_not_blank;

use super::{decode_enum, decode_id};

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub deadline: Timestamp,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for Project {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            name: row.try_get("name")?,
            deadline: row.try_get("deadline")?,
            description: row.try_get("description")?,
            status: decode_enum(row, "status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Project {
    /// Apply the non-`None` fields of `patch` and re-validate the result.
    pub fn merge(mut self, patch: UpdateProject) -> Result<Self, CoreError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("description", &self.description)?;
        Ok(self)
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: Timestamp,
    pub description: String,
    /// Defaults to `active` if omitted.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_deadline")]
    pub deadline: Option<Timestamp>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn sample() -> Project {
        let now = Utc::now();
        Project {
            id: RecordId::generate(),
            name: "Atlas".into(),
            deadline: now,
            description: "Mapping service".into(),
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn serializes_with_underscore_id_and_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["_id"].is_string());
        assert!(json["createdAt"].is_string());
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn merge_only_touches_provided_fields() {
        let original = sample();
        let merged = original
            .clone()
            .merge(UpdateProject {
                name: Some("Renamed".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(merged.name, "Renamed");
        assert_eq!(merged.description, original.description);
        assert_eq!(merged.status, original.status);
    }

    #[test]
    fn merge_rejects_blank_name() {
        let result = sample().merge(UpdateProject {
            name: Some(String::new()),
            ..Default::default()
        });
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_dto_rejects_unknown_status() {
        let result = serde_json::from_value::<UpdateProject>(json!({"status": "archived"}));
        assert!(result.is_err());
    }

    #[test]
    fn update_dto_ignores_unknown_fields() {
        let dto: UpdateProject = serde_json::from_value(json!({"owner": "x"})).unwrap();
        assert!(dto.name.is_none());
    }
}
