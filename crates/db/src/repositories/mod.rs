//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod architecture_repo;
pub mod link_repo;
pub mod project_repo;
pub mod team_member_repo;

pub use architecture_repo::ArchitectureRepo;
pub use link_repo::LinkRepo;
pub use project_repo::ProjectRepo;
pub use team_member_repo::TeamMemberRepo;
