//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::variation::{Variation, VariationInput};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub is_multi: bool,
    pub default_bg_color: String,
    pub sort_order: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project joined with its ordered variation set, as returned by the
/// listing and mutation endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithVariations {
    #[serde(flatten)]
    pub project: Project,
    pub variations: Vec<Variation>,
}

/// Input DTO for creating or fully rewriting a project.
///
/// Updates are full writes, not patches: every submitted field
/// replaces the stored value, and `variations` replaces the stored
/// variation set wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub category: String,
    /// Defaults to the empty string if omitted.
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_multi: Option<bool>,
    /// Defaults to `"default"` if omitted.
    pub default_bg_color: Option<String>,
    /// The project's full variation set, in display order.
    #[serde(default)]
    pub variations: Vec<VariationInput>,
}

/// Input DTO for `PUT /projects/reorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderInput {
    /// The desired total order over all existing project ids.
    pub ids: Vec<DbId>,
}
