//! Candidate pool queries backing the match scorer.

use devmatch_core::matching::CandidateKind;
use devmatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::CompanySkillJoinRow;
use crate::models::developer::{DeveloperSkillJoinRow, APPROVAL_APPROVED};
use crate::models::matching::MatchPool;

/// Loads everything a match request needs from one consistent snapshot.
pub struct MatchRepo;

impl MatchRepo {
    /// Load a project's requirement and the candidate pools named in `kinds`.
    ///
    /// Runs in a single repeatable-read transaction so the requirement and
    /// the candidate rows can never disagree. Returns `None` when the project
    /// does not exist. When the project has no required skills, no candidate
    /// rows are read.
    pub async fn load_pool(
        pool: &PgPool,
        project_id: DbId,
        kinds: &[CandidateKind],
    ) -> Result<Option<MatchPool>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let project: Option<(Option<f64>,)> =
            sqlx::query_as("SELECT budget_max FROM projects WHERE id = $1")
                .bind(project_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((budget_max,)) = project else {
            tx.rollback().await?;
            return Ok(None);
        };

        let required_skill_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT skill_id FROM project_skills WHERE project_id = $1 ORDER BY skill_id",
        )
        .bind(project_id)
        .fetch_all(&mut *tx)
        .await?;

        let mut match_pool = MatchPool {
            required_skill_ids,
            budget_max,
            ..MatchPool::default()
        };

        if match_pool.required_skill_ids.is_empty() {
            tx.commit().await?;
            return Ok(Some(match_pool));
        }

        if kinds.contains(&CandidateKind::Developer) {
            match_pool.developer_rows = sqlx::query_as::<_, DeveloperSkillJoinRow>(
                "SELECT d.id AS developer_id, d.display_name, d.availability, d.hourly_rate,
                        s.id AS skill_id, s.name AS skill_name, ds.level
                 FROM developers d
                 JOIN developer_skills ds ON ds.developer_id = d.id
                 JOIN skills s ON s.id = ds.skill_id
                 WHERE d.approval_status = $1
                   AND EXISTS (
                       SELECT 1 FROM developer_skills m
                       WHERE m.developer_id = d.id AND m.skill_id = ANY($2)
                   )
                 ORDER BY d.id, s.id",
            )
            .bind(APPROVAL_APPROVED)
            .bind(&match_pool.required_skill_ids)
            .fetch_all(&mut *tx)
            .await?;
        }

        if kinds.contains(&CandidateKind::Company) {
            match_pool.company_rows = sqlx::query_as::<_, CompanySkillJoinRow>(
                "SELECT c.id AS company_id, c.display_name, c.organization_name, c.team_size,
                        c.current_projects, c.max_projects, c.rate_min, c.rate_max,
                        s.id AS skill_id, s.name AS skill_name, cs.importance
                 FROM companies c
                 JOIN company_skills cs ON cs.company_id = c.id
                 JOIN skills s ON s.id = cs.skill_id
                 WHERE EXISTS (
                     SELECT 1 FROM company_skills m
                     WHERE m.company_id = c.id AND m.skill_id = ANY($1)
                 )
                 ORDER BY c.id, s.id",
            )
            .bind(&match_pool.required_skill_ids)
            .fetch_all(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            project_id,
            required = match_pool.required_skill_ids.len(),
            developer_rows = match_pool.developer_rows.len(),
            company_rows = match_pool.company_rows.len(),
            "Loaded match pool",
        );

        Ok(Some(match_pool))
    }
}
