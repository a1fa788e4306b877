//! Repository for the `companies` and `company_skills` tables.

use devmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, display_name, organization_name, team_size, \
                       current_projects, max_projects, rate_min, rate_max, created_at, updated_at";

/// Provides profile operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies
                (user_id, display_name, organization_name, team_size,
                 current_projects, max_projects, rate_min, rate_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(input.user_id)
            .bind(&input.display_name)
            .bind(&input.organization_name)
            .bind(input.team_size)
            .bind(input.current_projects)
            .bind(input.max_projects)
            .bind(input.rate_min)
            .bind(input.rate_max)
            .fetch_one(pool)
            .await
    }

    /// Find the company profile owned by an authenticated user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE user_id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Add or update a skill on a company profile.
    pub async fn upsert_skill(
        pool: &PgPool,
        company_id: DbId,
        skill_id: DbId,
        importance: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO company_skills (company_id, skill_id, importance)
             VALUES ($1, $2, $3)
             ON CONFLICT (company_id, skill_id) DO UPDATE SET importance = EXCLUDED.importance",
        )
        .bind(company_id)
        .bind(skill_id)
        .bind(importance)
        .execute(pool)
        .await?;
        Ok(())
    }
}
