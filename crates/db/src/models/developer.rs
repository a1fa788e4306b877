//! Developer profile model, DTOs and the skill join row used for matching.

use devmatch_core::error::CoreError;
use devmatch_core::matching::DeveloperSkillRow;
use devmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const APPROVAL_PENDING: &str = "pending";
pub const APPROVAL_APPROVED: &str = "approved";
pub const APPROVAL_REJECTED: &str = "rejected";

/// A row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub user_id: DbId,
    pub display_name: String,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
    pub approval_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a developer profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeveloper {
    pub user_id: DbId,
    pub display_name: String,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
    /// Defaults to `pending` if omitted.
    pub approval_status: Option<String>,
}

/// One `(developer, skill)` pair from the candidate pool query.
#[derive(Debug, Clone, FromRow)]
pub struct DeveloperSkillJoinRow {
    pub developer_id: DbId,
    pub display_name: String,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
    pub skill_id: DbId,
    pub skill_name: String,
    pub level: String,
}

impl TryFrom<DeveloperSkillJoinRow> for DeveloperSkillRow {
    type Error = CoreError;

    fn try_from(row: DeveloperSkillJoinRow) -> Result<Self, Self::Error> {
        Ok(DeveloperSkillRow {
            level: row.level.parse()?,
            developer_id: row.developer_id,
            display_name: row.display_name,
            availability: row.availability,
            hourly_rate: row.hourly_rate,
            skill_id: row.skill_id,
            skill_label: row.skill_name,
        })
    }
}
