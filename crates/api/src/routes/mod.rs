pub mod health;
pub mod projects;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /skills                      list (auth), create (admin)
/// /projects/{id}/skills        get (auth), replace (owner or admin)
/// /projects/{id}/matches       ranked candidates (owner or admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Skill catalog.
        .nest("/skills", skills::router())
        // Project requirements and candidate matching.
        .nest("/projects", projects::router())
}
