//! # kindred Core
//!
//! Core library for the kindred similarity lookup engine.
//!
//! This crate provides the in-memory data model and query path:
//!
//! - [`Domain`] - One of the four independent catalogs
//! - [`CatalogTable`] - Ordered item records, indexed by source row
//! - [`SimilarityIndex`] - Precomputed title -> neighbor-row mapping
//! - [`FieldMapping`] - Static per-domain projection rules
//! - [`resolve`] - Title -> ordered, display-ready recommendations
//!
//! ## Example
//!
//! ```rust
//! use kindred_core::{
//!     resolve, CatalogTable, Domain, FieldMapping, ItemRecord, SimilarityIndex,
//! };
//!
//! let rows: Vec<ItemRecord> = ["Inception", "Interstellar", "Tenet"]
//!     .iter()
//!     .map(|title| {
//!         [
//!             ("title".to_string(), title.to_string()),
//!             ("genres".to_string(), "Action, Sci-Fi".to_string()),
//!         ]
//!         .into_iter()
//!         .collect()
//!     })
//!     .collect();
//! let table = CatalogTable::new(Domain::Movies, vec!["title".into(), "genres".into()], rows);
//!
//! let neighbors = [("Inception".to_string(), vec![1, 2])].into_iter().collect();
//! let index = SimilarityIndex::new(Domain::Movies, neighbors);
//! index.validate(&table).unwrap();
//!
//! let mapping = FieldMapping::for_domain(Domain::Movies);
//! let records = resolve(&table, &index, &mapping, "Inception", None);
//! assert_eq!(records.len(), 2);
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod index;
pub mod mapping;
pub mod normalize;
pub mod project;
pub mod resolver;

pub use catalog::{CatalogTable, ItemRecord};
pub use domain::Domain;
pub use error::{Error, Result};
pub use index::SimilarityIndex;
pub use mapping::{FieldKind, FieldMapping, FieldRule};
pub use project::{project, FieldValue, RecommendationRecord, UNAVAILABLE};
pub use resolver::resolve;
