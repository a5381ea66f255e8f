//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::color::validate_bg_color;
use folio_core::error::CoreError;
use folio_core::ordering::validate_reorder;
use folio_core::types::DbId;
use folio_db::models::project::{ProjectInput, ProjectWithVariations, ReorderInput};
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminAuth;
use crate::state::AppState;

/// Reject inputs with a blank title or an unknown background color
/// before touching the database.
fn validate_input(input: &ProjectInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project title is required".into(),
        )));
    }
    if let Some(color) = input.default_bg_color.as_deref() {
        validate_bg_color(color)?;
    }
    if input.variations.iter().any(|v| v.image.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Every variation needs an image URL".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/projects
///
/// Public listing: every project in display order with its variations
/// nested.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithVariations>>> {
    let projects = ProjectRepo::list_with_variations(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
pub async fn create(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<ProjectWithVariations>)> {
    validate_input(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.project.id, title = %project.project.title, "Created project");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
///
/// Full rewrite: the submitted variation list replaces the stored set.
pub async fn update(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<ProjectWithVariations>> {
    validate_input(&input)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// PUT /api/v1/projects/reorder
///
/// Applies a new total order. The submitted ids must be a permutation
/// of the existing id set; anything else is rejected and nothing
/// changes.
pub async fn reorder(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Json(input): Json<ReorderInput>,
) -> AppResult<StatusCode> {
    let existing = ProjectRepo::all_ids(&state.pool).await?;
    validate_reorder(&input.ids, &existing)?;
    ProjectRepo::reorder(&state.pool, &input.ids).await?;
    tracing::info!(count = input.ids.len(), "Reordered projects");
    Ok(StatusCode::NO_CONTENT)
}
