// crates/pleiades-core/src/model/vocabulary.rs
//! Per-record lookup tables for repeated vocabulary terms, and the
//! connections map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label -> URI table where the first registration of a label wins.
///
/// Later registrations of a known label are skipped, so feeding the same
/// list twice leaves the table unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyTable(BTreeMap<String, String>);

impl VocabularyTable {
    /// Returns `true` if the label was new.
    pub fn register(&mut self, label: &str, uri: &str) -> bool {
        if self.0.contains_key(label) {
            return false;
        }
        self.0.insert(label.to_owned(), uri.to_owned());
        true
    }

    pub fn uri(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The four vocabulary tables accumulated while walking one record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub time_periods: VocabularyTable,
    pub confidence_metrics: VocabularyTable,
    pub association_certainties: VocabularyTable,
    pub location_types: VocabularyTable,
}

/// Connected record id -> relation type. Duplicate ids keep the last type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connections(BTreeMap<String, String>);

impl Connections {
    pub fn build<I, K, V>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            edges
                .into_iter()
                .map(|(id, kind)| (id.into(), kind.into()))
                .collect(),
        )
    }

    pub fn relation(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
