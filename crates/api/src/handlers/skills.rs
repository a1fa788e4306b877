//! Handlers for the skill catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use devmatch_core::error::CoreError;
use devmatch_db::models::skill::CreateSkill;
use devmatch_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/skills
///
/// List the whole skill catalog ordered by name.
pub async fn list_skills(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST /api/v1/skills
///
/// Add a skill to the catalog. Admin only. Duplicate names map to 409 via
/// the `uq_skills_name` constraint.
pub async fn create_skill(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Skill name must not be empty".into()).into());
    }

    let skill = SkillRepo::create(
        &state.pool,
        &CreateSkill {
            name: name.to_string(),
            category: input.category,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        skill_id = skill.id,
        name = %skill.name,
        "Skill created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}
