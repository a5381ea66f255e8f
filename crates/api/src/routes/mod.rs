pub mod auth;
pub mod category;
pub mod health;
pub mod project;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
///
/// /projects                   list (public), create (auth)
/// /projects/reorder           apply new ordering (auth)
/// /projects/{id}              update, delete (auth)
///
/// /categories                 list (public), create (auth)
/// /categories/{id}            delete (auth)
///
/// /upload                     store a file (auth)
/// /upload/crop                crop then store (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/categories", category::router())
        .nest("/upload", upload::router())
}
