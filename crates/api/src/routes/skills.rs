//! Route definitions for the skill catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /    -> list_skills
/// POST   /    -> create_skill (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(skills::list_skills).post(skills::create_skill))
}
