//! Record-level projection: catalog row -> display-ready record.

use crate::catalog::ItemRecord;
use crate::mapping::{FieldKind, FieldMapping};
use crate::normalize::{format_artist_list, split_tags};
use serde::{Deserialize, Serialize};

/// Sentinel substituted when a mapped column is missing from a row.
pub const UNAVAILABLE: &str = "N/A";

/// A normalized display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Tags(_) => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            FieldValue::Tags(tags) => Some(tags),
            FieldValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Tags(tags) => write!(f, "{}", tags.join(", ")),
        }
    }
}

/// One resolved recommendation: output field -> normalized value, in
/// mapping-declaration order. Transient per-query output with no
/// identity of its own; ownership sits entirely with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    fields: Vec<(String, FieldValue)>,
}

impl RecommendationRecord {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Project one catalog row through a field mapping.
///
/// Produces exactly the output fields the mapping declares, in order.
/// A missing source column becomes the [`UNAVAILABLE`] sentinel rather
/// than aborting the projection; for tag fields the sentinel is the
/// single tag, since substitution happens before tokenization.
pub fn project(record: &ItemRecord, mapping: &FieldMapping) -> RecommendationRecord {
    let fields = mapping
        .rules()
        .iter()
        .map(|rule| {
            let value = match (rule.kind, record.get(&rule.column)) {
                (FieldKind::Plain, Some(raw)) => FieldValue::Text(raw.to_string()),
                (FieldKind::Plain, None) => FieldValue::Text(UNAVAILABLE.to_string()),
                (FieldKind::TagList, Some(raw)) => FieldValue::Tags(split_tags(raw)),
                (FieldKind::TagList, None) => {
                    FieldValue::Tags(vec![UNAVAILABLE.to_string()])
                }
                (FieldKind::EncodedList, Some(raw)) => FieldValue::Text(format_artist_list(raw)),
                (FieldKind::EncodedList, None) => FieldValue::Text(UNAVAILABLE.to_string()),
            };
            (rule.output.clone(), value)
        })
        .collect();

    RecommendationRecord::new(fields)
}
