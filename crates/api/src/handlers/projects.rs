//! Handlers for a project's required skills.
//!
//! Reading requirements is open to any authenticated user; changing them is
//! limited to the owning company or an admin.

use std::collections::BTreeSet;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use devmatch_core::error::CoreError;
use devmatch_core::roles::ROLE_COMPANY;
use devmatch_core::types::DbId;
use devmatch_db::models::project::{Project, SetProjectSkills};
use devmatch_db::repositories::{CompanyRepo, ProjectRepo, SkillRepo};
use devmatch_db::DbPool;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireCompany};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a project, returning 404 if it does not exist.
pub(crate) async fn find_project(pool: &DbPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into()
        })
}

/// Load a project the caller may manage: admins manage every project,
/// companies only their own.
pub(crate) async fn find_owned_project(
    pool: &DbPool,
    user: &AuthUser,
    id: DbId,
) -> AppResult<Project> {
    let project = find_project(pool, id).await?;
    if user.is_admin() {
        return Ok(project);
    }

    let owns = user.role == ROLE_COMPANY
        && CompanyRepo::find_by_user_id(pool, user.user_id)
            .await?
            .is_some_and(|company| company.id == project.company_id);

    if !owns {
        return Err(CoreError::Forbidden(
            "Only the owning company can access this project".into(),
        )
        .into());
    }
    Ok(project)
}

/// GET /api/v1/projects/{id}/skills
///
/// List the skills a project requires.
pub async fn get_project_skills(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_project(&state.pool, project_id).await?;
    let skills = SkillRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// PUT /api/v1/projects/{id}/skills
///
/// Replace a project's required skills. Every id must exist in the catalog;
/// duplicates are ignored.
pub async fn set_project_skills(
    RequireCompany(user): RequireCompany,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<SetProjectSkills>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    find_owned_project(&state.pool, &user, project_id).await?;

    let requested: Vec<DbId> = input
        .skill_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let existing: BTreeSet<DbId> = SkillRepo::find_existing_ids(&state.pool, &requested)
        .await?
        .into_iter()
        .collect();
    let unknown: Vec<String> = requested
        .iter()
        .filter(|id| !existing.contains(id))
        .map(ToString::to_string)
        .collect();
    if !unknown.is_empty() {
        let message = format!("Unknown skill ids: {}", unknown.join(", "));
        return Err(CoreError::Validation(message).into());
    }

    ProjectRepo::replace_skills(&state.pool, project_id, &requested).await?;

    tracing::info!(
        user_id = user.user_id,
        project_id,
        skill_count = requested.len(),
        "Project skills updated",
    );

    let skills = SkillRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: skills }))
}
