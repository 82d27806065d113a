use crate::catalog::CatalogTable;
use crate::domain::Domain;
use crate::error::{Error, Result};
use ahash::AHashMap;

/// Precomputed nearest-neighbor table for one domain.
///
/// Maps an item title to the row indices of its most-similar items,
/// most-similar first. The list length is bounded by the top-K chosen
/// by the precomputation pipeline; this layer never re-ranks it.
///
/// Lookup is exact-match on the title as stored: no case folding, no
/// trimming. That mirrors how the neighbor tables are keyed and is a
/// known limitation rather than an accident.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    domain: Domain,
    neighbors: AHashMap<String, Vec<usize>>,
}

impl SimilarityIndex {
    pub fn new(domain: Domain, neighbors: AHashMap<String, Vec<usize>>) -> Self {
        Self { domain, neighbors }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of titles with a neighbor list.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Exact-match lookup. A title absent from the table has no known
    /// neighbors; that is an expected miss, not an error.
    pub fn lookup(&self, title: &str) -> Option<&[usize]> {
        self.neighbors.get(title).map(Vec::as_slice)
    }

    /// Check every referenced row index against the catalog.
    ///
    /// The neighbor table and the catalog are produced as a pair; an
    /// out-of-range index means the artifacts are out of sync, which is
    /// a load-time integrity failure, not a per-query condition.
    pub fn validate(&self, table: &CatalogTable) -> Result<()> {
        let len = table.len();
        for indices in self.neighbors.values() {
            if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
                return Err(Error::NeighborOutOfBounds {
                    domain: self.domain,
                    index: bad,
                    len,
                });
            }
        }
        Ok(())
    }
}
