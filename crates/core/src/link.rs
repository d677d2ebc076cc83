//! Link categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a project link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Documentation.
    Doc,
    /// A deployed instance.
    Deploy,
    /// Development resources (repository, tracker, ...).
    Dev,
}

impl LinkType {
    pub const ALL: [LinkType; 3] = [Self::Doc, Self::Deploy, Self::Dev];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Deploy => "deploy",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!("`{s}` is not a valid enum value for path `type`"))
            })
    }
}
