use std::sync::Arc;

use stackboard_db::Store;

use crate::config::ServerConfig;
use crate::managers::{ArchitectureManager, LinkManager, ProjectManager, TeamMemberManager};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend injected at startup.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn projects(&self) -> ProjectManager {
        ProjectManager::new(Arc::clone(&self.store))
    }

    pub fn architectures(&self) -> ArchitectureManager {
        ArchitectureManager::new(Arc::clone(&self.store))
    }

    pub fn links(&self) -> LinkManager {
        LinkManager::new(Arc::clone(&self.store))
    }

    pub fn team_members(&self) -> TeamMemberManager {
        TeamMemberManager::new(Arc::clone(&self.store))
    }
}
