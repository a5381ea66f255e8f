//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /          -> list (public)
/// POST   /          -> create
/// PUT    /reorder   -> reorder
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
///
/// `/reorder` is a static segment, so it takes precedence over `/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/reorder", put(project::reorder))
        .route("/{id}", put(project::update).delete(project::delete))
}
