//! Project posting model and DTOs.

use devmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
}

/// DTO replacing a project's required skills.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetProjectSkills {
    #[validate(length(min = 1, max = 50, message = "a project needs between 1 and 50 skills"))]
    pub skill_ids: Vec<DbId>,
}
