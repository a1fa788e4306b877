//! Skill catalog model and DTOs.

use devmatch_core::skills::SkillRef;
use devmatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Skill> for SkillRef {
    fn from(skill: &Skill) -> Self {
        SkillRef::new(skill.id, skill.name.clone())
    }
}

/// DTO for adding a skill to the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub category: Option<String>,
}
