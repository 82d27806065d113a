//! # kindred Store
//!
//! Artifact layer for the kindred similarity lookup engine: loads the
//! CSV catalogs and JSON neighbor tables the precomputation pipeline
//! produces, and owns them for the life of the process through the
//! [`CatalogRegistry`].

pub mod loader;
pub mod registry;

pub use loader::{load_catalog, load_neighbors};
pub use registry::{CatalogRegistry, DomainData};
