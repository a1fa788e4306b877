//! Repository for the `skills` table.

use devmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, created_at, updated_at";

/// Provides catalog operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List the whole catalog ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY name");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Skills required by a project, ordered by name.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        sqlx::query_as::<_, Skill>(
            "SELECT s.id, s.name, s.category, s.created_at, s.updated_at
             FROM skills s
             JOIN project_skills ps ON ps.skill_id = s.id
             WHERE ps.project_id = $1
             ORDER BY s.name",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Return the subset of `ids` that exist in the catalog.
    pub async fn find_existing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM skills WHERE id = ANY($1) ORDER BY id")
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
