pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                                  liveness message (public)
///
/// /projects                              list (public), create (auth)
/// /projects/stats                        aggregate counts (public)
/// /projects/years                        distinct years (public)
/// /projects/{id}                         get (public), update (author/admin)
/// /projects/{id}/view                    record view (public)
/// /projects/{id}/rate                    rate (auth)
/// /projects/{id}/faculty-validation      approve/disapprove (faculty/admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::ping_router())
        .nest("/projects", project::router())
}
