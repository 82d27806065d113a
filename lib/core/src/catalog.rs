use crate::domain::Domain;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single catalog row: column name -> text cell.
///
/// Records are immutable after load. Identity is the row's position in
/// its [`CatalogTable`]; the record itself carries no id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    cells: AHashMap<String, String>,
}

impl ItemRecord {
    pub fn new(cells: AHashMap<String, String>) -> Self {
        Self { cells }
    }

    /// Look up a cell by column name. Absent columns are `None`, never
    /// an error; the projection layer substitutes its own sentinel.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for ItemRecord {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Ordered table of item records for one domain.
///
/// Row order is the index space the neighbor table refers into, so it
/// must match the source artifact exactly and never change after load.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    domain: Domain,
    headers: Vec<String>,
    rows: Vec<ItemRecord>,
}

impl CatalogTable {
    pub fn new(domain: Domain, headers: Vec<String>, rows: Vec<ItemRecord>) -> Self {
        Self {
            domain,
            headers,
            rows,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Fetch a row by its positional index.
    pub fn row(&self, index: usize) -> Option<&ItemRecord> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
