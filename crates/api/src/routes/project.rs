//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /stats                     -> stats
/// GET    /years                     -> available_years
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// POST   /{id}/view                 -> record_view
/// POST   /{id}/rate                 -> rate
/// POST   /{id}/faculty-validation   -> faculty_validation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/stats", get(project::stats))
        .route("/years", get(project::available_years))
        .route("/{id}", get(project::get_by_id).put(project::update))
        .route("/{id}/view", post(project::record_view))
        .route("/{id}/rate", post(project::rate))
        .route(
            "/{id}/faculty-validation",
            post(project::faculty_validation),
        )
}
