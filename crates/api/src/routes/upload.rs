//! Route definitions for the upload gateway.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use folio_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /        -> upload
/// POST /crop    -> crop
/// ```
///
/// The body limit is raised above the 50 MiB file ceiling to leave
/// room for multipart framing; the per-file check in the handler is
/// what enforces the actual policy.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .route("/crop", post(upload::crop))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
}
