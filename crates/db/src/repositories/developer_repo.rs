//! Repository for the `developers` and `developer_skills` tables.

use devmatch_core::skills::ProficiencyLevel;
use devmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::developer::{CreateDeveloper, Developer, APPROVAL_PENDING};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, display_name, availability, hourly_rate, approval_status, \
                       created_at, updated_at";

/// Provides profile operations for developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Insert a new developer profile, returning the created row.
    ///
    /// If `approval_status` is `None` in the input, defaults to `pending`.
    pub async fn create(pool: &PgPool, input: &CreateDeveloper) -> Result<Developer, sqlx::Error> {
        let query = format!(
            "INSERT INTO developers
                (user_id, display_name, availability, hourly_rate, approval_status)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{APPROVAL_PENDING}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Developer>(&query)
            .bind(input.user_id)
            .bind(&input.display_name)
            .bind(&input.availability)
            .bind(input.hourly_rate)
            .bind(&input.approval_status)
            .fetch_one(pool)
            .await
    }

    /// Add or re-level a skill on a developer profile.
    pub async fn upsert_skill(
        pool: &PgPool,
        developer_id: DbId,
        skill_id: DbId,
        level: ProficiencyLevel,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO developer_skills (developer_id, skill_id, level)
             VALUES ($1, $2, $3)
             ON CONFLICT (developer_id, skill_id) DO UPDATE SET level = EXCLUDED.level",
        )
        .bind(developer_id)
        .bind(skill_id)
        .bind(level.as_str())
        .execute(pool)
        .await?;
        Ok(())
    }
}
