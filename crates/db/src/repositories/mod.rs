//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod company_repo;
pub mod developer_repo;
pub mod match_repo;
pub mod project_repo;
pub mod skill_repo;

pub use company_repo::CompanyRepo;
pub use developer_repo::DeveloperRepo;
pub use match_repo::MatchRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
