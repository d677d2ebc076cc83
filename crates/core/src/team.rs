//! Team member roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role a team member plays on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamRole {
    Designer,
    FrontEnd,
    BackEnd,
    DevOps,
    ProjectLead,
    Other,
}

impl TeamRole {
    pub const ALL: [TeamRole; 6] = [
        Self::Designer,
        Self::FrontEnd,
        Self::BackEnd,
        Self::DevOps,
        Self::ProjectLead,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Designer => "designer",
            Self::FrontEnd => "front-end",
            Self::BackEnd => "back-end",
            Self::DevOps => "dev-ops",
            Self::ProjectLead => "project-lead",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!("`{s}` is not a valid enum value for path `role`"))
            })
    }
}
