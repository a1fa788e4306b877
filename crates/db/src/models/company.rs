//! Company profile model, DTOs and the skill join row used for matching.

use devmatch_core::matching::CompanySkillRow;
use devmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub user_id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub team_size: Option<i32>,
    pub current_projects: Option<i32>,
    pub max_projects: Option<i32>,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub user_id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub team_size: Option<i32>,
    pub current_projects: Option<i32>,
    pub max_projects: Option<i32>,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
}

/// One `(company, skill)` pair from the candidate pool query.
#[derive(Debug, Clone, FromRow)]
pub struct CompanySkillJoinRow {
    pub company_id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub team_size: Option<i32>,
    pub current_projects: Option<i32>,
    pub max_projects: Option<i32>,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
    pub skill_id: DbId,
    pub skill_name: String,
    pub importance: Option<String>,
}

/// Negative counts cannot pass the schema checks; treat them as unknown.
fn non_negative(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

impl From<CompanySkillJoinRow> for CompanySkillRow {
    fn from(row: CompanySkillJoinRow) -> Self {
        CompanySkillRow {
            company_id: row.company_id,
            display_name: row.display_name,
            organization_name: row.organization_name,
            team_size: non_negative(row.team_size),
            current_projects: non_negative(row.current_projects),
            max_projects: non_negative(row.max_projects),
            rate_min: row.rate_min,
            rate_max: row.rate_max,
            skill_id: row.skill_id,
            skill_label: row.skill_name,
            importance: row.importance,
        }
    }
}
