//! Per-domain field mappings.
//!
//! A mapping declares which source columns populate which output fields
//! and how each value is normalized for display. Mappings are static:
//! defined once per domain, never mutated at runtime. Declaration order
//! is the order fields appear in the projected record.

use crate::domain::Domain;
use serde::{Deserialize, Serialize};

/// How a projected value is normalized before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Passed through as-is.
    Plain,
    /// Comma-separated tags, split into trimmed tokens.
    TagList,
    /// A text-encoded list literal (e.g. `['Drake', 'Rihanna']`),
    /// decoded and joined with ", " for display.
    EncodedList,
}

/// One output field: where it comes from and how it is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Name of the field in the projected record.
    pub output: String,
    /// Source column in the catalog table.
    pub column: String,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn new(output: &str, column: &str, kind: FieldKind) -> Self {
        Self {
            output: output.to_string(),
            column: column.to_string(),
            kind,
        }
    }
}

/// Ordered set of field rules for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    rules: Vec<FieldRule>,
}

impl FieldMapping {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The static mapping for a domain, mirroring the columns the
    /// precomputation pipeline writes for it.
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Movies => Self::new(vec![
                FieldRule::new("title", "title", FieldKind::Plain),
                FieldRule::new("genres", "genres", FieldKind::TagList),
            ]),
            Domain::Music => Self::new(vec![
                FieldRule::new("name", "name", FieldKind::Plain),
                FieldRule::new("artist", "artists", FieldKind::EncodedList),
                FieldRule::new("mood", "Mood", FieldKind::TagList),
                FieldRule::new("release", "release_date", FieldKind::Plain),
            ]),
            Domain::Anime => Self::new(vec![
                FieldRule::new("name", "name", FieldKind::Plain),
                FieldRule::new("genre", "genre", FieldKind::TagList),
                FieldRule::new("episodes", "episodes", FieldKind::Plain),
                FieldRule::new("rating", "rating", FieldKind::Plain),
                FieldRule::new("type", "type", FieldKind::Plain),
            ]),
            Domain::Games => Self::new(vec![
                FieldRule::new("name", "Name", FieldKind::Plain),
                FieldRule::new("genres", "Genres", FieldKind::TagList),
                FieldRule::new("release_date", "Release date", FieldKind::Plain),
                FieldRule::new("description", "About the game", FieldKind::Plain),
            ]),
        }
    }
}
