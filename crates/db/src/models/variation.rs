//! Variation entity model and input DTO.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A variation row from the `variations` table: one visual rendition
/// (image or video reference plus display hints) owned by a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Variation {
    pub id: DbId,
    pub project_id: DbId,
    /// Public URL of the image or video asset.
    pub image: String,
    /// Optional hex color tag; empty string when unset.
    pub color_code: String,
    /// Display scale multiplier.
    pub image_scale: f64,
    /// Position within the owning project.
    pub sort_order: DbId,
    pub created_at: Timestamp,
}

/// Input DTO for one variation inside a project write.
///
/// Variations are never patched individually: the parent project's
/// whole set is deleted and re-inserted from the submitted list.
#[derive(Debug, Clone, Deserialize)]
pub struct VariationInput {
    pub image: String,
    /// Defaults to the empty string if omitted.
    pub color_code: Option<String>,
    /// Defaults to `1` if omitted.
    pub image_scale: Option<f64>,
}
