//! Reorder policy for the project listing.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Check that a submitted ordering is a permutation of the existing
/// project id set.
///
/// Anything else (duplicates, unknown ids, missing ids) is rejected so
/// a stale or corrupted client can never silently drop ordering state.
pub fn validate_reorder(submitted: &[DbId], existing: &[DbId]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(submitted.len());
    for &id in submitted {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "Duplicate project id {id} in reorder list"
            )));
        }
    }

    let existing: HashSet<DbId> = existing.iter().copied().collect();
    if let Some(unknown) = submitted.iter().find(|id| !existing.contains(id)) {
        return Err(CoreError::Validation(format!(
            "Unknown project id {unknown} in reorder list"
        )));
    }
    if seen.len() != existing.len() {
        return Err(CoreError::Validation(format!(
            "Reorder list covers {} of {} projects; all ids must be present",
            seen.len(),
            existing.len()
        )));
    }
    Ok(())
}
