// crates/pleiades-core/src/model/record.rs
use super::attestation::AttestationTable;
use super::name::Name;
use super::values::{BoundingBox, DisplayProperties, Geometry, ReprPoint};
use super::vocabulary::{Connections, Vocabulary};
use serde::{Deserialize, Serialize};

/// Which of the two output shapes to produce from a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordShape {
    Full,
    #[default]
    Curated,
}

/// Fields taken from the record's first feature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<DisplayProperties>,
}

/// Fields taken from the record's first location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_certainty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestations: Option<AttestationTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archaeological_remains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// The location's `@type` tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
}

/// Full-fidelity place: every mapped field plus the record's vocabulary
/// tables.
///
/// Contributor, revision history and bibliography data are not mapped.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<FeatureDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Connections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repr_point: Option<ReprPoint>,
    /// May repeat across records; kept per record for ease of access.
    pub vocabulary: Vocabulary,
}

/// Reduced place exposing the commonly used subset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CuratedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Id of the first feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestations: Option<AttestationTable>,
    /// Earliest attested year (negative = BCE).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// Latest attested year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archaeological_remains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Connections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repr_point: Option<ReprPoint>,
}

/// A mapped record in either shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "record", rename_all = "lowercase")]
pub enum MappedRecord {
    Full(FullRecord),
    Curated(CuratedRecord),
}

impl MappedRecord {
    pub fn shape(&self) -> RecordShape {
        match self {
            Self::Full(_) => RecordShape::Full,
            Self::Curated(_) => RecordShape::Curated,
        }
    }

    pub fn as_full(&self) -> Option<&FullRecord> {
        match self {
            Self::Full(r) => Some(r),
            Self::Curated(_) => None,
        }
    }

    pub fn as_curated(&self) -> Option<&CuratedRecord> {
        match self {
            Self::Curated(r) => Some(r),
            Self::Full(_) => None,
        }
    }

    pub fn has_location(&self) -> bool {
        match self {
            Self::Full(r) => r.location.is_some(),
            Self::Curated(r) => {
                r.attestations.is_some()
                    || r.start_date.is_some()
                    || r.end_date.is_some()
                    || r.archaeological_remains.is_some()
            }
        }
    }

    pub fn connections(&self) -> Option<&Connections> {
        match self {
            Self::Full(r) => r.connections.as_ref(),
            Self::Curated(r) => r.connections.as_ref(),
        }
    }
}

impl From<FullRecord> for MappedRecord {
    fn from(r: FullRecord) -> Self {
        Self::Full(r)
    }
}

impl From<CuratedRecord> for MappedRecord {
    fn from(r: CuratedRecord) -> Self {
        Self::Curated(r)
    }
}
