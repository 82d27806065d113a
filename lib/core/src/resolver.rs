//! Query resolution: title -> ordered recommendation records.

use crate::catalog::CatalogTable;
use crate::index::SimilarityIndex;
use crate::mapping::FieldMapping;
use crate::project::{project, RecommendationRecord};
use tracing::warn;

/// Resolve one similarity query against a loaded domain.
///
/// Returns the projected, normalized records for the title's
/// precomputed neighbors, preserving the stored similarity order. The
/// result is never re-sorted, deduplicated or filtered here.
///
/// A blank title models "no query yet" and short-circuits to an empty
/// result without touching the index; an unknown title does the same
/// after the lookup. Both are expected outcomes, not errors.
pub fn resolve(
    table: &CatalogTable,
    index: &SimilarityIndex,
    mapping: &FieldMapping,
    title: &str,
    limit: Option<usize>,
) -> Vec<RecommendationRecord> {
    if title.trim().is_empty() {
        return Vec::new();
    }

    let Some(neighbors) = index.lookup(title) else {
        return Vec::new();
    };

    let take = limit.unwrap_or(neighbors.len());
    let mut records = Vec::with_capacity(neighbors.len().min(take));

    for &row_index in neighbors.iter().take(take) {
        // A stale index entry is skipped so the rest of the list
        // survives; load-time validation makes this a rare path.
        let Some(record) = table.row(row_index) else {
            warn!(
                domain = %table.domain(),
                row = row_index,
                "neighbor points past end of catalog, skipping"
            );
            continue;
        };
        records.push(project(record, mapping));
    }

    records
}
