// crates/pleiades-core/src/raw.rs
//! Raw input as it comes from the Pleiades JSON dump.
//!
//! NOTE: These types mirror the external dataset. Every field is optional at
//! this layer; which ones are *required* is decided by the mapper.

use crate::error::{PleiadesError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One place node of the dump's `@graph` list, kept as the untouched JSON
/// value. Mapping reads typed views out of it and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The record's `id`, if it is a string. Used to label errors.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Keyed access used by the mapper. The record must be a JSON object.
    pub(crate) fn fields(&self) -> Result<Fields<'_>> {
        match &self.0 {
            Value::Object(map) => Ok(Fields { map, section: None }),
            other => Err(PleiadesError::shape(
                "record",
                format!("expected an object, got {}", kind_of(other)),
            )),
        }
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Borrowed view of one JSON object of a record: the place itself, or the
/// first element of `features` / `locations`.
///
/// Keys are deserialized one at a time, only when the mapper asks for them.
/// A wrongly typed key fails only the shapes that read it, and the error
/// names that key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    section: Option<&'static str>,
}

impl<'a> Fields<'a> {
    fn path(&self, key: &str) -> String {
        match self.section {
            Some(section) => format!("{section}.{key}"),
            None => key.to_owned(),
        }
    }

    /// Deserializes `key`; a missing key or `null` is `None`.
    pub(crate) fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|e| PleiadesError::shape(self.path(key), e.to_string())),
        }
    }

    /// A present, non-empty string.
    pub(crate) fn string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get::<String>(key)?.filter(|s| !s.is_empty()))
    }

    /// A present, non-empty list.
    pub(crate) fn list<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        Ok(self.get::<Vec<T>>(key)?.filter(|v| !v.is_empty()))
    }

    /// First non-empty string of a list-valued label (`featureType` etc.).
    pub(crate) fn label(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .get::<Vec<String>>(key)?
            .and_then(|v| v.into_iter().next())
            .filter(|s| !s.is_empty()))
    }

    /// The first object of a list-valued key, as a nested section.
    pub(crate) fn first(&self, key: &'static str) -> Result<Option<Fields<'a>>> {
        let map: &'a Map<String, Value> = self.map;
        let items = match map.get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(PleiadesError::shape(
                    self.path(key),
                    format!("expected a list, got {}", kind_of(other)),
                ))
            }
        };
        match items.first() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Fields {
                map,
                section: Some(key),
            })),
            Some(other) => Err(PleiadesError::shape(
                self.path(key),
                format!("expected a list of objects, got {}", kind_of(other)),
            )),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// `features[0].geometry`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeometryRaw {
    #[serde(default, rename = "type")]
    pub r#type: Option<String>,
    #[serde(default)]
    pub coordinates: Option<crate::model::Coordinates>,
}

impl GeometryRaw {
    /// `{}` (or only empty values) counts as no geometry at all.
    pub(crate) fn is_empty(&self) -> bool {
        present_str(&self.r#type).is_none() && self.coordinates.is_none()
    }
}

/// `features[0].properties`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PropertiesRaw {
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location_precision: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// `{ timePeriod, timePeriodURI, confidence, confidenceURI }`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AttestationRaw {
    #[serde(default, rename = "timePeriod")]
    pub time_period: Option<String>,
    #[serde(default, rename = "timePeriodURI")]
    pub time_period_uri: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default, rename = "confidenceURI")]
    pub confidence_uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConnectionRaw {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "connectionType")]
    pub connection_type: Option<String>,
}

/// Raw attested name. All fields are required by the mapper.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NameRaw {
    #[serde(default, rename = "nameType")]
    pub name_type: Option<String>,
    #[serde(default, rename = "transcriptionAccuracy")]
    pub transcription_accuracy: Option<String>,
    #[serde(default, rename = "associationCertainty")]
    pub association_certainty: Option<String>,
    #[serde(default)]
    pub romanized: Option<String>,
    #[serde(default)]
    pub attestations: Option<Vec<AttestationRaw>>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "transcriptionCompleteness")]
    pub transcription_completeness: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub attested: Option<String>,
}

/// A string is present when it is neither missing, `null`, nor empty.
pub(crate) fn present_str(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_strings_and_lists_count_as_absent() {
        let raw = RawRecord::new(json!({ "title": "", "subject": [], "featureType": [""] }));
        let fields = raw.fields().unwrap();
        assert_eq!(fields.string("title").unwrap(), None);
        assert!(fields.list::<String>("subject").unwrap().is_none());
        assert_eq!(fields.label("featureType").unwrap(), None);
    }

    #[test]
    fn nulls_read_as_absent() {
        let raw = RawRecord::new(json!({ "id": "1", "title": null, "features": null }));
        let fields = raw.fields().unwrap();
        assert_eq!(fields.string("id").unwrap().as_deref(), Some("1"));
        assert!(fields.string("title").unwrap().is_none());
        assert!(fields.first("features").unwrap().is_none());
    }

    #[test]
    fn wrongly_typed_key_is_named_in_the_error() {
        let raw = RawRecord::new(json!({ "id": "9", "names": "Roma" }));
        let err = raw.fields().unwrap().list::<NameRaw>("names").unwrap_err();
        assert!(matches!(err, PleiadesError::ShapeMismatch { .. }));
        assert_eq!(err.field(), Some("names"));
    }

    #[test]
    fn nested_sections_prefix_their_keys() {
        let raw = RawRecord::new(json!({ "locations": [{ "accuracy_value": "10" }] }));
        let location = raw.fields().unwrap().first("locations").unwrap().unwrap();
        let err = location.get::<f64>("accuracy_value").unwrap_err();
        assert_eq!(err.field(), Some("locations.accuracy_value"));
    }

    #[test]
    fn non_object_record_is_a_shape_mismatch() {
        let err = RawRecord::new(json!([1, 2])).fields().unwrap_err();
        assert_eq!(err.field(), Some("record"));
    }

    #[test]
    fn empty_geometry_is_empty() {
        let geometry: GeometryRaw = serde_json::from_value(json!({})).unwrap();
        assert!(geometry.is_empty());
        let geometry: GeometryRaw = serde_json::from_value(json!({ "type": "Point" })).unwrap();
        assert!(!geometry.is_empty());
    }
}
