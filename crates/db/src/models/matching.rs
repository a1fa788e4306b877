//! Data loaded in one read for a single match request.

use devmatch_core::types::DbId;

use super::company::CompanySkillJoinRow;
use super::developer::DeveloperSkillJoinRow;

/// A project's requirement and every candidate sharing at least one of its
/// skills, read from a single snapshot.
#[derive(Debug, Clone, Default)]
pub struct MatchPool {
    pub required_skill_ids: Vec<DbId>,
    pub budget_max: Option<f64>,
    /// Approved developers only.
    pub developer_rows: Vec<DeveloperSkillJoinRow>,
    /// All companies; there is no approval gate for companies.
    pub company_rows: Vec<CompanySkillJoinRow>,
}
