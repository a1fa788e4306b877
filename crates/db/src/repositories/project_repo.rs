//! Repository for the `projects` and `project_skills` tables.

use devmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, company_id, title, description, budget_min, budget_max, created_at, updated_at";

/// Provides CRUD operations for projects and their required skills.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (company_id, title, description, budget_min, budget_max)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.company_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the project's required skills in one transaction.
    ///
    /// Callers must check that every id exists first; unknown ids violate
    /// the foreign key and abort the whole replacement.
    pub async fn replace_skills(
        pool: &PgPool,
        project_id: DbId,
        skill_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_skills WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO project_skills (project_id, skill_id)
             SELECT $1, UNNEST($2::BIGINT[])
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(skill_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(project_id, count = skill_ids.len(), "Project skills replaced");
        Ok(())
    }
}
