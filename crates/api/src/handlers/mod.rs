pub mod architecture;
pub mod link;
pub mod project;
pub mod team_member;
