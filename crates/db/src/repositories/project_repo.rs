//! Repository for the `projects` table and its owned variation set.
//!
//! All multi-table writes (create with variations, the full variation
//! replace on update, delete, reorder) run inside one transaction so a
//! reader never observes a project with a half-written variation set.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::project::{Project, ProjectInput, ProjectWithVariations};
use crate::models::variation::{Variation, VariationInput};
use crate::repositories::variation_repo::{VariationRepo, VARIATION_COLUMNS};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, description, is_multi, default_bg_color, \
     sort_order, created_at, updated_at";

/// Provides CRUD, reorder, and variation-replace operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with its variation set, returning the
    /// created rows.
    ///
    /// The project is appended to the ordering (`max(sort_order) + 1`).
    /// Omitted optional fields take their column defaults.
    pub async fn create(
        pool: &PgPool,
        input: &ProjectInput,
    ) -> Result<ProjectWithVariations, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (title, category, description, is_multi, default_bg_color, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, FALSE), COALESCE($5, 'default'),
                     (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM projects))
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.is_multi)
            .bind(&input.default_bg_color)
            .fetch_one(&mut *tx)
            .await?;

        let variations =
            Self::insert_variations_inner(&mut tx, project.id, &input.variations).await?;

        tx.commit().await?;
        Ok(ProjectWithVariations {
            project,
            variations,
        })
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in display order: `sort_order` ascending, ties
    /// (rows created before any reorder ran) newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY sort_order ASC, created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List all projects in display order, each joined with its ordered
    /// variations. Two queries plus in-memory grouping, no per-project
    /// round trips.
    pub async fn list_with_variations(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithVariations>, sqlx::Error> {
        let projects = Self::list(pool).await?;
        let mut variations = VariationRepo::list_all(pool).await?;

        Ok(projects
            .into_iter()
            .map(|project| {
                let (own, rest): (Vec<_>, Vec<_>) = variations
                    .drain(..)
                    .partition(|v| v.project_id == project.id);
                variations = rest;
                ProjectWithVariations {
                    project,
                    variations: own,
                }
            })
            .collect())
    }

    /// Rewrite a project and replace its whole variation set from the
    /// submitted list.
    ///
    /// Delete-then-reinsert runs in the same transaction as the project
    /// update, so a failed re-insert rolls back rather than leaving the
    /// project with zero variations.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<ProjectWithVariations>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                title = $2,
                category = $3,
                description = COALESCE($4, ''),
                is_multi = COALESCE($5, FALSE),
                default_bg_color = COALESCE($6, 'default'),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.is_multi)
            .bind(&input.default_bg_color)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM variations WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let variations = Self::insert_variations_inner(&mut tx, id, &input.variations).await?;

        tx.commit().await?;
        Ok(Some(ProjectWithVariations {
            project,
            variations,
        }))
    }

    /// Delete a project and its variations. Returns `true` if a row was
    /// removed.
    ///
    /// The schema cascades variation deletes; the explicit delete keeps
    /// the operation correct against a schema without the cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM variations WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Collect the full set of existing project ids.
    pub async fn all_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as("SELECT id FROM projects")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Apply a new total order: each id gets `sort_order` equal to its
    /// index in `ids`. All assignments commit together or not at all.
    ///
    /// The caller is responsible for checking that `ids` is a
    /// permutation of the existing id set beforehand.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (index, &id) in ids.iter().enumerate() {
            sqlx::query("UPDATE projects SET sort_order = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(index as DbId)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Insert one variation row per input entry, positions assigned
    /// from the list index. Runs inside the caller's transaction.
    async fn insert_variations_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        inputs: &[VariationInput],
    ) -> Result<Vec<Variation>, sqlx::Error> {
        let query = format!(
            "INSERT INTO variations (project_id, image, color_code, image_scale, sort_order)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 1), $5)
             RETURNING {VARIATION_COLUMNS}"
        );

        let mut variations = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let variation = sqlx::query_as::<_, Variation>(&query)
                .bind(project_id)
                .bind(&input.image)
                .bind(&input.color_code)
                .bind(input.image_scale)
                .bind(index as DbId)
                .fetch_one(&mut **tx)
                .await?;
            variations.push(variation);
        }
        Ok(variations)
    }
}
