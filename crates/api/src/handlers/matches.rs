//! Handler for ranked candidate matches on a project.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use devmatch_core::error::CoreError;
use devmatch_core::matching::{
    aggregate_companies, aggregate_developers, rank, score_companies, score_developers,
    CandidateKind, CompanyCandidate, DeveloperCandidate, DeveloperSkillRow, MatchResult,
    RequiredSkills, ScoreBreakdown,
};
use devmatch_core::types::DbId;
use devmatch_db::models::project::Project;
use devmatch_db::repositories::MatchRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::projects::find_owned_project;
use crate::middleware::rbac::RequireCompany;
use crate::query::MatchQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// Developer profile fields shown alongside a match.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperProfile {
    pub id: DbId,
    pub display_name: String,
    pub availability: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// Company profile fields shown alongside a match.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: DbId,
    pub display_name: String,
    pub organization_name: String,
    pub team_size: Option<u32>,
    pub current_projects: Option<u32>,
    pub max_projects: Option<u32>,
    pub rate_min: Option<f64>,
    pub rate_max: Option<f64>,
}

/// One ranked entry. Exactly one of `developer` / `company` is set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<DeveloperProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    /// Every skill label on the candidate's profile.
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub scores: ScoreBreakdown,
    pub match_percentage: u32,
    pub recommendation_reason: String,
}

/// The project the matches were computed for.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: DbId,
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMatches {
    pub project: ProjectSummary,
    pub matches: Vec<MatchEntry>,
}

impl From<Project> for ProjectSummary {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            company_id: project.company_id,
            title: project.title,
            description: project.description,
            budget_min: project.budget_min,
            budget_max: project.budget_max,
        }
    }
}

impl From<&DeveloperCandidate> for DeveloperProfile {
    fn from(candidate: &DeveloperCandidate) -> Self {
        Self {
            id: candidate.id,
            display_name: candidate.display_name.clone(),
            availability: candidate
                .availability
                .as_ref()
                .map(|a| a.as_str().to_string()),
            hourly_rate: candidate.hourly_rate,
        }
    }
}

impl From<&CompanyCandidate> for CompanyProfile {
    fn from(candidate: &CompanyCandidate) -> Self {
        Self {
            id: candidate.id,
            display_name: candidate.display_name.clone(),
            organization_name: candidate.organization_name.clone(),
            team_size: candidate.team_size,
            current_projects: candidate.current_projects,
            max_projects: candidate.max_projects,
            rate_min: candidate.rate_min,
            rate_max: candidate.rate_max,
        }
    }
}

/// Candidates of both kinds, indexed for looking up profiles after ranking.
struct CandidateIndex {
    developers: HashMap<DbId, DeveloperCandidate>,
    companies: HashMap<DbId, CompanyCandidate>,
}

impl CandidateIndex {
    fn entry(&self, result: MatchResult) -> Option<MatchEntry> {
        let (developer, company, skills) = match result.kind {
            CandidateKind::Developer => {
                let candidate = self.developers.get(&result.candidate_id)?;
                (Some(DeveloperProfile::from(candidate)), None, candidate.skill_labels())
            }
            CandidateKind::Company => {
                let candidate = self.companies.get(&result.candidate_id)?;
                (None, Some(CompanyProfile::from(candidate)), candidate.skill_labels())
            }
        };

        Some(MatchEntry {
            developer,
            company,
            skills,
            matching_skills: result.matching_skills,
            scores: result.scores,
            match_percentage: result.match_percentage,
            recommendation_reason: result.recommendation_reason,
        })
    }
}

/// GET /api/v1/projects/{id}/matches?kind=all|developer|company&limit=N
///
/// Score the candidate pools named by `kind` against the project's required
/// skills and return the top `limit` by total score. A project without
/// required skills is rejected with 422 `PROJECT_SKILLS_REQUIRED`.
pub async fn list_matches(
    RequireCompany(user): RequireCompany,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<MatchQuery>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let project = find_owned_project(&state.pool, &user, project_id).await?;

    let kinds = params.kind.kinds();
    let pool = MatchRepo::load_pool(&state.pool, project_id, kinds)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    let required: RequiredSkills = pool.required_skill_ids.iter().copied().collect();
    let config = &state.config.matching;

    let developer_rows = pool
        .developer_rows
        .into_iter()
        .map(DeveloperSkillRow::try_from)
        .collect::<Result<Vec<_>, CoreError>>()?;
    let developers = aggregate_developers(developer_rows);
    let companies = aggregate_companies(pool.company_rows.into_iter().map(Into::into));

    let mut results = Vec::new();
    if kinds.contains(&CandidateKind::Developer) {
        results.extend(score_developers(&required, &developers, pool.budget_max, config)?);
    }
    if kinds.contains(&CandidateKind::Company) {
        results.extend(score_companies(&required, &companies, config)?);
    }

    let scored = results.len();
    let limit = params.limit.unwrap_or(state.config.match_result_limit);
    let mut ranked = rank(results);
    ranked.truncate(limit);

    let index = CandidateIndex {
        developers: developers.into_iter().map(|d| (d.id, d)).collect(),
        companies: companies.into_iter().map(|c| (c.id, c)).collect(),
    };
    let matches: Vec<MatchEntry> = ranked
        .into_iter()
        .filter_map(|result| index.entry(result))
        .collect();

    tracing::info!(
        user_id = user.user_id,
        project_id,
        required_skills = required.len(),
        scored,
        returned = matches.len(),
        "Project matches computed",
    );

    Ok(Json(DataResponse {
        data: ProjectMatches {
            project: project.into(),
            matches,
        },
    }))
}
