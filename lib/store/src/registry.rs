//! Per-domain catalog registry with lazy, memoized loading.

use crate::loader::{load_catalog, load_neighbors};
use kindred_core::{
    resolve, CatalogTable, Domain, FieldMapping, RecommendationRecord, Result, SimilarityIndex,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything the resolver needs for one domain, loaded as a unit.
#[derive(Debug)]
pub struct DomainData {
    pub table: CatalogTable,
    pub index: SimilarityIndex,
    pub mapping: FieldMapping,
}

/// Owns one catalog table and one neighbor index per domain.
///
/// Loading is lazy and memoized: the first query for a domain loads
/// and validates its artifacts, later queries share the same `Arc`.
/// A failed load is not cached, so a fixed artifact becomes loadable
/// on the next call, and a broken domain never affects the others.
pub struct CatalogRegistry {
    data_dir: PathBuf,
    domains: RwLock<HashMap<Domain, Arc<DomainData>>>,
}

impl CatalogRegistry {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            domains: RwLock::new(HashMap::new()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get a domain's loaded data, loading it on first access.
    ///
    /// Double-checked under the write lock so the expensive load runs
    /// at most once per domain even when several callers race on first
    /// access; all of them receive the same loaded result.
    pub fn domain_data(&self, domain: Domain) -> Result<Arc<DomainData>> {
        if let Some(data) = self.domains.read().get(&domain) {
            return Ok(data.clone());
        }

        let mut domains = self.domains.write();
        if let Some(data) = domains.get(&domain) {
            return Ok(data.clone());
        }

        let data = Arc::new(self.load_domain(domain)?);
        domains.insert(domain, data.clone());
        Ok(data)
    }

    fn load_domain(&self, domain: Domain) -> Result<DomainData> {
        let table = load_catalog(domain, &self.data_dir.join(domain.catalog_file()))?;
        let index = load_neighbors(domain, &self.data_dir.join(domain.neighbors_file()))?;

        // Publish a domain only if its artifact pair is in sync.
        index.validate(&table)?;

        info!(%domain, rows = table.len(), titles = index.len(), "domain loaded");
        Ok(DomainData {
            table,
            index,
            mapping: FieldMapping::for_domain(domain),
        })
    }

    /// Whether a domain is already loaded (never triggers a load).
    pub fn is_loaded(&self, domain: Domain) -> bool {
        self.domains.read().contains_key(&domain)
    }

    /// Eagerly load every domain, collecting per-domain failures.
    ///
    /// One malformed domain is fatal only to itself; the rest stay
    /// fully functional.
    pub fn preload_all(&self) -> Vec<(Domain, kindred_core::Error)> {
        let mut failures = Vec::new();
        for domain in Domain::ALL {
            if let Err(e) = self.domain_data(domain) {
                warn!(%domain, error = %e, "domain failed to load");
                failures.push((domain, e));
            }
        }
        failures
    }

    /// Resolve a similarity query: the engine's external API surface.
    pub fn resolve(
        &self,
        domain: Domain,
        title: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RecommendationRecord>> {
        // "No query yet" never touches the artifacts on disk.
        if title.trim().is_empty() {
            return Ok(Vec::new());
        }

        let data = self.domain_data(domain)?;
        Ok(resolve(&data.table, &data.index, &data.mapping, title, limit))
    }
}
