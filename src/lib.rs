//! # kindred
//!
//! A similarity lookup engine for four independent catalogs: movies,
//! music, anime and games. Each domain ships two precomputed artifacts
//! (a CSV catalog and a title -> neighbor-row JSON table); kindred loads
//! them once, then answers "items similar to this title" queries with
//! display-ready, normalized records.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! kindred --data-dir ./data games "Stardew Valley"
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use kindred::prelude::*;
//!
//! let registry = CatalogRegistry::new("./data");
//! let records = registry.resolve(Domain::Games, "Stardew Valley", Some(10))?;
//! for record in &records {
//!     for (field, value) in record.fields() {
//!         println!("{}: {}", field, value);
//!     }
//! }
//! # Ok::<(), kindred::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`kindred-core`](https://docs.rs/kindred-core) - Data model, projection, normalization, resolver
//! - [`kindred-store`](https://docs.rs/kindred-store) - Artifact loading and the per-domain registry

// Re-export core types
pub use kindred_core::{
    resolve, CatalogTable, Domain, Error, FieldKind, FieldMapping, FieldRule, FieldValue,
    ItemRecord, RecommendationRecord, Result, SimilarityIndex, UNAVAILABLE,
};

// Re-export the artifact layer
pub use kindred_store::{CatalogRegistry, DomainData};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        resolve, CatalogRegistry, CatalogTable, Domain, Error, FieldMapping, FieldValue,
        ItemRecord, RecommendationRecord, Result, SimilarityIndex,
    };
}
