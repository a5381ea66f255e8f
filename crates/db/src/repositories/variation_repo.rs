//! Read-side repository for the `variations` table.
//!
//! Writes go through [`ProjectRepo`](crate::repositories::ProjectRepo):
//! a variation set only ever changes as part of its owning project's
//! transaction.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::variation::Variation;

/// Column list shared with the insert path in the project repository.
pub(crate) const VARIATION_COLUMNS: &str =
    "id, project_id, image, color_code, image_scale, sort_order, created_at";

/// Provides read operations for variations.
pub struct VariationRepo;

impl VariationRepo {
    /// List every variation, grouped by owning project and ordered
    /// within each group. Used to assemble the project listing without
    /// per-project queries.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Variation>, sqlx::Error> {
        let query = format!(
            "SELECT {VARIATION_COLUMNS} FROM variations ORDER BY project_id, sort_order, id"
        );
        sqlx::query_as::<_, Variation>(&query).fetch_all(pool).await
    }

    /// List a single project's variations in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Variation>, sqlx::Error> {
        let query = format!(
            "SELECT {VARIATION_COLUMNS} FROM variations
             WHERE project_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Variation>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Count variations across all projects. Used by tests to assert
    /// the cascade leaves no orphans.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM variations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
