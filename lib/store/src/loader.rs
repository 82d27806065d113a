//! On-disk artifact loading.
//!
//! Two artifacts per domain, both produced by the precomputation
//! pipeline and treated as opaque inputs here: a CSV catalog (rows =
//! items, row order = the neighbor table's index space) and a JSON
//! neighbor table (title -> ordered row indices). Any structural
//! failure surfaces as a per-domain [`Error::DataLoad`].

use ahash::AHashMap;
use kindred_core::{CatalogTable, Domain, Error, ItemRecord, Result, SimilarityIndex};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load a domain's CSV catalog, preserving source row order.
pub fn load_catalog(domain: Domain, path: &Path) -> Result<CatalogTable> {
    let file = File::open(path).map_err(|e| Error::data_load(domain, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::data_load(domain, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::data_load(domain, e))?;
        // Short rows simply lack their trailing columns; projection
        // substitutes the sentinel for those.
        let cells: ItemRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(cells);
    }

    debug!(%domain, rows = rows.len(), path = %path.display(), "catalog loaded");
    Ok(CatalogTable::new(domain, headers, rows))
}

/// Load a domain's JSON neighbor table.
pub fn load_neighbors(domain: Domain, path: &Path) -> Result<SimilarityIndex> {
    let file = File::open(path).map_err(|e| Error::data_load(domain, e))?;
    let neighbors: AHashMap<String, Vec<usize>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::data_load(domain, e))?;

    debug!(%domain, titles = neighbors.len(), path = %path.display(), "neighbor table loaded");
    Ok(SimilarityIndex::new(domain, neighbors))
}
