//! Link entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use stackboard_core::error::CoreError;
use stackboard_core::link::LinkType;
use stackboard_core::types::{RecordId, Timestamp};
use stackboard_core::validation::ensure_not_blank;

use super::{decode_enum, decode_id};

/// A row from the `links` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub of_project: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r> FromRow<'r, PgRow> for Link {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: decode_id(row, "id")?,
            name: row.try_get("name")?,
            url: row.try_get("url")?,
            link_type: decode_enum(row, "link_type")?,
            of_project: decode_id(row, "of_project")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl Link {
    /// Apply the non-`None` fields of `patch` and re-validate the result.
    pub fn merge(mut self, patch: UpdateLink) -> Result<Self, CoreError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(link_type) = patch.link_type {
            self.link_type = link_type;
        }
        if let Some(of_project) = patch.of_project {
            self.of_project = of_project;
        }
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("url", &self.url)?;
        Ok(self)
    }
}

/// DTO for creating a link.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLink {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub of_project: RecordId,
}

/// DTO for updating a link. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLink {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<LinkType>,
    pub of_project: Option<RecordId>,
}
