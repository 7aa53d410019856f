// crates/pleiades-core/src/model/values.rs
//! Small immutable value containers copied verbatim out of a record's
//! sub-documents: geometry, bounding box and feature display properties.

use crate::error::{PleiadesError, Result};
use crate::raw::{GeometryRaw, PropertiesRaw};
use serde::{Deserialize, Serialize};

/// Coordinate payload of a geometry, kept by nesting depth.
///
/// The depth is not checked against the geometry kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// `[lon, lat]`
    Position(Vec<f64>),
    /// `[[lon, lat], ...]` (LineString, MultiPoint)
    Path(Vec<Vec<f64>>),
    /// `[[[lon, lat], ...], ...]` (Polygon, MultiLineString)
    Rings(Vec<Vec<Vec<f64>>>),
    /// MultiPolygon
    MultiRings(Vec<Vec<Vec<Vec<f64>>>>),
}

impl Coordinates {
    /// Number of positions at any depth.
    pub fn position_count(&self) -> usize {
        match self {
            Self::Position(p) => usize::from(!p.is_empty()),
            Self::Path(p) => p.len(),
            Self::Rings(r) => r.iter().map(Vec::len).sum(),
            Self::MultiRings(m) => m.iter().flatten().map(Vec::len).sum(),
        }
    }
}

/// Geometry kind label plus its coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub kind: String,
    pub coordinates: Coordinates,
}

impl Geometry {
    pub(crate) fn from_raw(raw: &GeometryRaw) -> Result<Self> {
        let kind = raw
            .r#type
            .clone()
            .ok_or_else(|| PleiadesError::missing("geometry.type"))?;
        let coordinates = raw
            .coordinates
            .clone()
            .ok_or_else(|| PleiadesError::missing("geometry.coordinates"))?;
        Ok(Self { kind, coordinates })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// `[min_lon, min_lat, max_lon, max_lat]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl BoundingBox {
    /// Builds a box from exactly four ordered numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [min_longitude, min_latitude, max_longitude, max_latitude] => Ok(Self {
                min_longitude,
                min_latitude,
                max_longitude,
                max_latitude,
            }),
            _ => Err(PleiadesError::shape(
                "bbox",
                format!("expected 4 numbers, got {}", values.len()),
            )),
        }
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.min_longitude..=self.max_longitude).contains(&lon)
            && (self.min_latitude..=self.max_latitude).contains(&lat)
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = PleiadesError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

/// Representative `[lon, lat]` point of a place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReprPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl ReprPoint {
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [longitude, latitude] => Ok(Self {
                longitude,
                latitude,
            }),
            _ => Err(PleiadesError::shape(
                "reprPoint",
                format!("expected 2 numbers, got {}", values.len()),
            )),
        }
    }
}

/// Display properties of the first feature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Stable link to the place page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_precision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl DisplayProperties {
    pub(crate) fn from_raw(raw: &PropertiesRaw) -> Self {
        Self {
            snippet: raw.snippet.clone(),
            link: raw.link.clone(),
            description: raw.description.clone(),
            location_precision: raw.location_precision.clone(),
            title: raw.title.clone(),
        }
    }
}
