//! Route definitions for project requirements and matching.

use axum::routing::get;
use axum::Router;

use crate::handlers::{matches, projects};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /{id}/skills     -> get_project_skills
/// PUT    /{id}/skills     -> set_project_skills (owning company or admin)
/// GET    /{id}/matches    -> list_matches (owning company or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}/skills",
            get(projects::get_project_skills).put(projects::set_project_skills),
        )
        .route("/{id}/matches", get(matches::list_matches))
}
