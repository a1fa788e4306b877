//! Integration tests for the candidate pool read.
//!
//! Exercises the repository layer against a real database:
//! - Approved-only developer filtering
//! - Unfiltered company pool
//! - Full skill mappings for candidates sharing at least one skill
//! - Projects without required skills

use devmatch_core::matching::{aggregate_companies, aggregate_developers, CandidateKind};
use devmatch_core::matching::{CompanySkillRow, DeveloperSkillRow};
use devmatch_core::skills::ProficiencyLevel;
use devmatch_db::models::company::CreateCompany;
use devmatch_db::models::developer::{CreateDeveloper, APPROVAL_APPROVED, APPROVAL_REJECTED};
use devmatch_db::models::project::CreateProject;
use devmatch_db::models::skill::CreateSkill;
use devmatch_db::repositories::{CompanyRepo, DeveloperRepo, MatchRepo, ProjectRepo, SkillRepo};
use sqlx::PgPool;

const BOTH: &[CandidateKind] = &[CandidateKind::Developer, CandidateKind::Company];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn skill(pool: &PgPool, name: &str) -> i64 {
    SkillRepo::create(
        pool,
        &CreateSkill {
            name: name.to_string(),
            category: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn developer(pool: &PgPool, user_id: i64, approval: Option<&str>) -> i64 {
    DeveloperRepo::create(
        pool,
        &CreateDeveloper {
            user_id,
            display_name: format!("dev-{user_id}"),
            availability: Some("available".to_string()),
            hourly_rate: Some(80.0),
            approval_status: approval.map(str::to_string),
        },
    )
    .await
    .unwrap()
    .id
}

async fn company(pool: &PgPool, user_id: i64) -> i64 {
    CompanyRepo::create(
        pool,
        &CreateCompany {
            user_id,
            display_name: format!("company-{user_id}"),
            organization_name: "Org".to_string(),
            team_size: Some(10),
            current_projects: Some(1),
            max_projects: Some(3),
            rate_min: None,
            rate_max: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn project(pool: &PgPool, company_id: i64, budget_max: Option<f64>) -> i64 {
    ProjectRepo::create(
        pool,
        &CreateProject {
            company_id,
            title: "Marketplace rebuild".to_string(),
            description: None,
            budget_min: None,
            budget_max,
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_yields_none(pool: PgPool) {
    let result = MatchRepo::load_pool(&pool, 999_999, BOTH).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_without_skills_reads_no_candidates(pool: PgPool) {
    let owner = company(&pool, 1).await;
    let project_id = project(&pool, owner, Some(10_000.0)).await;

    let match_pool = MatchRepo::load_pool(&pool, project_id, BOTH)
        .await
        .unwrap()
        .unwrap();

    assert!(match_pool.required_skill_ids.is_empty());
    assert_eq!(match_pool.budget_max, Some(10_000.0));
    assert!(match_pool.developer_rows.is_empty());
    assert!(match_pool.company_rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_approved_developers_are_loaded(pool: PgPool) {
    let react = skill(&pool, "React").await;
    let node = skill(&pool, "Node.js").await;
    let css = skill(&pool, "CSS").await;

    let approved = developer(&pool, 10, Some(APPROVAL_APPROVED)).await;
    let pending = developer(&pool, 11, None).await;
    let unrelated = developer(&pool, 12, Some(APPROVAL_APPROVED)).await;
    let rejected = developer(&pool, 13, Some(APPROVAL_REJECTED)).await;

    DeveloperRepo::upsert_skill(&pool, approved, react, ProficiencyLevel::Expert)
        .await
        .unwrap();
    DeveloperRepo::upsert_skill(&pool, approved, css, ProficiencyLevel::Beginner)
        .await
        .unwrap();
    DeveloperRepo::upsert_skill(&pool, pending, react, ProficiencyLevel::Expert)
        .await
        .unwrap();
    DeveloperRepo::upsert_skill(&pool, unrelated, css, ProficiencyLevel::Expert)
        .await
        .unwrap();
    DeveloperRepo::upsert_skill(&pool, rejected, node, ProficiencyLevel::Expert)
        .await
        .unwrap();

    let owner = company(&pool, 1).await;
    let project_id = project(&pool, owner, None).await;
    ProjectRepo::replace_skills(&pool, project_id, &[react, node])
        .await
        .unwrap();

    let match_pool = MatchRepo::load_pool(&pool, project_id, &[CandidateKind::Developer])
        .await
        .unwrap()
        .unwrap();

    let rows: Vec<DeveloperSkillRow> = match_pool
        .developer_rows
        .into_iter()
        .map(|row| row.try_into().unwrap())
        .collect();
    let candidates = aggregate_developers(rows);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, approved);
    // The full skill mapping is loaded, not only the matching skills.
    assert_eq!(candidates[0].skill_count(), 2);
    assert!(match_pool.company_rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn companies_are_loaded_without_approval_filter(pool: PgPool) {
    let react = skill(&pool, "React").await;
    let go = skill(&pool, "Go").await;

    let owner = company(&pool, 1).await;
    let other = company(&pool, 2).await;
    CompanyRepo::upsert_skill(&pool, other, react, Some("primary"))
        .await
        .unwrap();
    CompanyRepo::upsert_skill(&pool, other, go, None).await.unwrap();

    let project_id = project(&pool, owner, None).await;
    ProjectRepo::replace_skills(&pool, project_id, &[react]).await.unwrap();

    let match_pool = MatchRepo::load_pool(&pool, project_id, BOTH)
        .await
        .unwrap()
        .unwrap();

    let rows: Vec<CompanySkillRow> = match_pool
        .company_rows
        .into_iter()
        .map(Into::into)
        .collect();
    let candidates = aggregate_companies(rows);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, other);
    assert_eq!(candidates[0].skill_count(), 2);
    assert!(candidates[0].has_capacity());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_skills_overwrites_previous_set(pool: PgPool) {
    let react = skill(&pool, "React").await;
    let node = skill(&pool, "Node.js").await;
    let owner = company(&pool, 1).await;
    let project_id = project(&pool, owner, None).await;

    ProjectRepo::replace_skills(&pool, project_id, &[react, node])
        .await
        .unwrap();
    ProjectRepo::replace_skills(&pool, project_id, &[node, node])
        .await
        .unwrap();

    let skills = SkillRepo::list_for_project(&pool, project_id).await.unwrap();
    let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Node.js"]);

    let existing = SkillRepo::find_existing_ids(&pool, &[react, 424_242])
        .await
        .unwrap();
    assert_eq!(existing, vec![react]);
}
