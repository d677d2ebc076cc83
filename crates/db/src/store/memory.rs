use async_trait::async_trait;
use chrono::Utc;
use stackboard_core::link::LinkType;
use stackboard_core::types::RecordId;
use tokio::sync::RwLock;

use super::Store;
use crate::error::StoreError;
use crate::models::architecture::{Architecture, CreateArchitecture};
use crate::models::link::{CreateLink, Link};
use crate::models::project::{CreateProject, Project};
use crate::models::team_member::{CreateTeamMember, TeamMember};

/// Process-local [`Store`].
///
/// Records are kept in insertion order behind a single lock, so constraint
/// checks and the write that follows them are atomic. Constraint names match
/// the PostgreSQL schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    architectures: Vec<Architecture>,
    links: Vec<Link>,
    team_members: Vec<TeamMember>,
}

impl Tables {
    fn require_project(&self, id: &RecordId, constraint: &str) -> Result<(), StoreError> {
        if self.projects.iter().any(|p| &p.id == id) {
            Ok(())
        } else {
            Err(StoreError::ForeignKeyViolation {
                constraint: constraint.to_string(),
            })
        }
    }

    fn ensure_unique_name(&self, name: &str, except: Option<&RecordId>) -> Result<(), StoreError> {
        let taken = self
            .projects
            .iter()
            .any(|p| p.name == name && Some(&p.id) != except);
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: "uq_projects_name".into(),
            });
        }
        Ok(())
    }

    fn ensure_single_architecture(
        &self,
        project_id: &RecordId,
        except: Option<&RecordId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .architectures
            .iter()
            .any(|a| &a.of_project == project_id && Some(&a.id) != except);
        if taken {
            return Err(StoreError::UniqueViolation {
                constraint: "uq_architectures_of_project".into(),
            });
        }
        Ok(())
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Replace the record with the same id, stamping `updated_at`.
macro_rules! save_in {
    ($rows:expr, $record:expr) => {{
        match $rows.iter_mut().find(|row| row.id == $record.id) {
            Some(row) => {
                let mut updated = $record.clone();
                updated.created_at = row.created_at;
                updated.updated_at = Utc::now();
                *row = updated.clone();
                Some(updated)
            }
            None => None,
        }
    }};
}

/// Remove the record with `id`, reporting whether one existed.
fn remove_by_id<T>(rows: &mut Vec<T>, id: &RecordId, id_of: impl Fn(&T) -> &RecordId) -> bool {
    let before = rows.len();
    rows.retain(|row| id_of(row) != id);
    rows.len() != before
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_project(&self, input: &CreateProject) -> Result<Project, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_name(&input.name, None)?;

        let now = Utc::now();
        let project = Project {
            id: RecordId::generate(),
            name: input.name.clone(),
            deadline: input.deadline,
            description: input.description.clone(),
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        tables.projects.push(project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: &RecordId) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| &p.id == id).cloned())
    }

    async fn find_project_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.name == name).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.tables.read().await.projects.clone())
    }

    async fn save_project(&self, project: &Project) -> Result<Option<Project>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_name(&project.name, Some(&project.id))?;
        Ok(save_in!(tables.projects, project))
    }

    async fn delete_project(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let removed = remove_by_id(&mut tables.projects, id, |p| &p.id);
        if removed {
            tables.architectures.retain(|a| &a.of_project != id);
            tables.links.retain(|l| &l.of_project != id);
            tables.team_members.retain(|m| &m.of_project != id);
        }
        Ok(removed)
    }

    async fn insert_architecture(
        &self,
        input: &CreateArchitecture,
    ) -> Result<Architecture, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_single_architecture(&input.of_project, None)?;
        tables.require_project(&input.of_project, "fk_architectures_of_project")?;

        let now = Utc::now();
        let architecture = Architecture {
            id: RecordId::generate(),
            name: input.name.clone(),
            description: input.description.clone(),
            of_project: input.of_project.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.architectures.push(architecture.clone());
        Ok(architecture)
    }

    async fn find_architecture(&self, id: &RecordId) -> Result<Option<Architecture>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.architectures.iter().find(|a| &a.id == id).cloned())
    }

    async fn find_architecture_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Option<Architecture>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .architectures
            .iter()
            .find(|a| &a.of_project == project_id)
            .cloned())
    }

    async fn list_architectures(&self) -> Result<Vec<Architecture>, StoreError> {
        Ok(self.tables.read().await.architectures.clone())
    }

    async fn save_architecture(
        &self,
        architecture: &Architecture,
    ) -> Result<Option<Architecture>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_single_architecture(&architecture.of_project, Some(&architecture.id))?;
        tables.require_project(&architecture.of_project, "fk_architectures_of_project")?;
        Ok(save_in!(tables.architectures, architecture))
    }

    async fn delete_architecture(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(remove_by_id(&mut tables.architectures, id, |a| &a.id))
    }

    async fn insert_link(&self, input: &CreateLink) -> Result<Link, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_project(&input.of_project, "fk_links_of_project")?;

        let now = Utc::now();
        let link = Link {
            id: RecordId::generate(),
            name: input.name.clone(),
            url: input.url.clone(),
            link_type: input.link_type,
            of_project: input.of_project.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.links.push(link.clone());
        Ok(link)
    }

    async fn find_link(&self, id: &RecordId) -> Result<Option<Link>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.links.iter().find(|l| &l.id == id).cloned())
    }

    async fn list_links_for_project(
        &self,
        project_id: &RecordId,
        link_type: Option<LinkType>,
    ) -> Result<Vec<Link>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .links
            .iter()
            .filter(|l| &l.of_project == project_id)
            .filter(|l| link_type.map_or(true, |t| l.link_type == t))
            .cloned()
            .collect())
    }

    async fn save_link(&self, link: &Link) -> Result<Option<Link>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_project(&link.of_project, "fk_links_of_project")?;
        Ok(save_in!(tables.links, link))
    }

    async fn delete_link(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(remove_by_id(&mut tables.links, id, |l| &l.id))
    }

    async fn insert_team_member(
        &self,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_project(&input.of_project, "fk_team_members_of_project")?;

        let now = Utc::now();
        let member = TeamMember {
            id: RecordId::generate(),
            name: input.name.clone(),
            role: input.role,
            of_project: input.of_project.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.team_members.push(member.clone());
        Ok(member)
    }

    async fn find_team_member(&self, id: &RecordId) -> Result<Option<TeamMember>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.team_members.iter().find(|m| &m.id == id).cloned())
    }

    async fn list_team_members_for_project(
        &self,
        project_id: &RecordId,
    ) -> Result<Vec<TeamMember>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .team_members
            .iter()
            .filter(|m| &m.of_project == project_id)
            .cloned()
            .collect())
    }

    async fn save_team_member(
        &self,
        member: &TeamMember,
    ) -> Result<Option<TeamMember>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.require_project(&member.of_project, "fk_team_members_of_project")?;
        Ok(save_in!(tables.team_members, member))
    }

    async fn delete_team_member(&self, id: &RecordId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(remove_by_id(&mut tables.team_members, id, |m| &m.id))
    }
}
