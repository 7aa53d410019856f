// crates/pleiades-core/src/model/convert.rs
//! **Record Mapper:** Raw -> Full / Curated.
//!
//! Every field is read under a "present and non-empty" guard and left out
//! of the output when absent. Only name entries, attestation labels,
//! connection edges, geometry, the fixed-arity arrays (`bbox`,
//! `reprPoint`) and wrongly typed keys can fail a record.
//!
//! Each shape reads only the keys it maps, so a malformed key that only the
//! full shape uses (e.g. `provenance`) does not fail the curated mapping.

use super::attestation::AttestationTable;
use super::name::{build_names, Name};
use super::record::{
    CuratedRecord, FeatureDetail, FullRecord, LocationDetail, MappedRecord, RecordShape,
};
use super::values::{BoundingBox, DisplayProperties, Geometry, ReprPoint};
use super::vocabulary::{Connections, Vocabulary};
use crate::error::{PleiadesError, Result};
use crate::raw::{
    present_str, AttestationRaw, ConnectionRaw, Fields, GeometryRaw, NameRaw, PropertiesRaw,
    RawRecord,
};

/// Maps one raw record to the full-fidelity shape.
pub fn map_full(raw: &RawRecord) -> Result<FullRecord> {
    raw.fields()
        .and_then(|place| full_from_fields(&place))
        .map_err(|e| e.in_record(raw.id()))
}

/// Maps one raw record to the curated shape.
pub fn map_curated(raw: &RawRecord) -> Result<CuratedRecord> {
    raw.fields()
        .and_then(|place| curated_from_fields(&place))
        .map_err(|e| e.in_record(raw.id()))
}

/// Maps one raw record to the requested shape.
pub fn map_record(raw: &RawRecord, shape: RecordShape) -> Result<MappedRecord> {
    match shape {
        RecordShape::Full => map_full(raw).map(MappedRecord::Full),
        RecordShape::Curated => map_curated(raw).map(MappedRecord::Curated),
    }
}

fn full_from_fields(place: &Fields<'_>) -> Result<FullRecord> {
    // Tables are local to this record; the order of the steps below decides
    // which URI a repeated label keeps.
    let mut vocabulary = Vocabulary::default();

    let feature = place
        .first("features")?
        .map(|feature| feature_detail(&feature))
        .transpose()?
        .and_then(non_default);

    let location = place
        .first("locations")?
        .map(|loc| location_detail(&loc, &mut vocabulary))
        .transpose()?
        .and_then(non_default);

    let connections = connections(place)?;
    let names = names(place)?;

    Ok(FullRecord {
        feature,
        location,
        connections,
        names,
        id: place.string("id")?,
        subjects: place.list("subject")?,
        title: place.string("title")?,
        provenance: place.string("provenance")?,
        details: place.string("details")?,
        r#type: place.string("type")?,
        uri: place.string("uri")?,
        description: place.string("description")?,
        place_types: place.list("placeTypes")?,
        bbox: bbox(place)?,
        repr_point: repr_point(place)?,
        vocabulary,
    })
}

fn curated_from_fields(place: &Fields<'_>) -> Result<CuratedRecord> {
    let mut record = CuratedRecord::default();

    if let Some(feature) = place.first("features")? {
        record.geometry = geometry(&feature)?;
        record.text_id = feature.string("id")?;
    }

    if let Some(location) = place.first("locations")? {
        record.attestations = location
            .list::<AttestationRaw>("attestations")?
            .map(|list| AttestationTable::from_raw(&list))
            .transpose()?;
        record.start_date = location.get("start")?;
        record.end_date = location.get("end")?;
        record.archaeological_remains = location.string("archaeologicalRemains")?;
    }

    record.connections = connections(place)?;
    record.names = names(place)?;
    record.id = place.string("id")?;
    record.subjects = place.list("subject")?;
    record.title = place.string("title")?;
    record.details = place.string("details")?;
    record.uri = place.string("uri")?;
    record.description = place.string("description")?;
    record.place_types = place.list("placeTypes")?;
    record.bbox = bbox(place)?;
    record.repr_point = repr_point(place)?;

    Ok(record)
}

fn geometry(feature: &Fields<'_>) -> Result<Option<Geometry>> {
    feature
        .get::<GeometryRaw>("geometry")?
        .filter(|raw| !raw.is_empty())
        .map(|raw| Geometry::from_raw(&raw))
        .transpose()
}

fn feature_detail(feature: &Fields<'_>) -> Result<FeatureDetail> {
    Ok(FeatureDetail {
        geometry: geometry(feature)?,
        kind: feature.string("type")?,
        id: feature.string("id")?,
        properties: feature
            .get::<PropertiesRaw>("properties")?
            .map(|raw| DisplayProperties::from_raw(&raw))
            .and_then(non_default),
    })
}

fn location_detail(location: &Fields<'_>, vocabulary: &mut Vocabulary) -> Result<LocationDetail> {
    let mut detail = LocationDetail::default();

    // a) association certainty
    if let Some(certainty) = location.string("associationCertainty")? {
        if let Some(uri) = location.string("associationCertaintyURI")? {
            vocabulary.association_certainties.register(&certainty, &uri);
        }
        detail.association_certainty = Some(certainty);
    }

    // b) attestations: last-write-wins table, first-write-wins vocabulary
    if let Some(list) = location.list::<AttestationRaw>("attestations")? {
        detail.attestations = Some(AttestationTable::from_raw(&list)?);
        for attestation in &list {
            let (period, confidence) = attestation.labels()?;
            if let Some(uri) = present_str(&attestation.time_period_uri) {
                vocabulary.time_periods.register(period, uri);
            }
            if let Some(uri) = present_str(&attestation.confidence_uri) {
                vocabulary.confidence_metrics.register(confidence, uri);
            }
        }
    }

    // c) feature type
    detail.feature_type = location.label("featureType")?;
    if let Some(uri) = location.label("featureTypeURI")? {
        if let Some(label) = detail.feature_type.as_deref() {
            vocabulary.location_types.register(label, &uri);
        }
        detail.feature_type_uri = Some(uri);
    }

    // d) flat fields
    detail.id = location.string("id")?;
    detail.start = location.get("start")?;
    detail.end = location.get("end")?;
    detail.title = location.string("title")?;
    detail.archaeological_remains = location.string("archaeologicalRemains")?;
    detail.details = location.string("details")?;
    detail.accuracy_value = location.get("accuracy_value")?;
    detail.description = location.string("description")?;
    detail.location_type = location.label("locationType")?;
    detail.uri = location.string("uri")?;
    detail.type_tag = location.string("@type")?;

    Ok(detail)
}

fn connections(place: &Fields<'_>) -> Result<Option<Connections>> {
    place
        .list::<ConnectionRaw>("connections")?
        .map(|list| build_connections(&list))
        .transpose()
}

fn build_connections(list: &[ConnectionRaw]) -> Result<Connections> {
    let edges = list
        .iter()
        .map(|c| -> Result<(&str, &str)> {
            let id = c
                .id
                .as_deref()
                .ok_or_else(|| PleiadesError::missing("connections.id"))?;
            let kind = c
                .connection_type
                .as_deref()
                .ok_or_else(|| PleiadesError::missing("connections.connectionType"))?;
            Ok((id, kind))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Connections::build(edges))
}

fn names(place: &Fields<'_>) -> Result<Option<Vec<Name>>> {
    place
        .list::<NameRaw>("names")?
        .map(|list| build_names(&list))
        .transpose()
}

fn bbox(place: &Fields<'_>) -> Result<Option<BoundingBox>> {
    place
        .list::<f64>("bbox")?
        .map(|values| BoundingBox::from_slice(&values))
        .transpose()
}

fn repr_point(place: &Fields<'_>) -> Result<Option<ReprPoint>> {
    place
        .list::<f64>("reprPoint")?
        .map(|values| ReprPoint::from_slice(&values))
        .transpose()
}

/// `None` for a sub-structure with nothing set.
fn non_default<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}

/// Curated projection of an already mapped full record: drops the
/// vocabulary tables, feature kind and properties, provenance, type and the
/// location fields outside the commonly used subset.
///
/// For any record that maps in full this equals [`map_curated`].
impl From<FullRecord> for CuratedRecord {
    fn from(full: FullRecord) -> Self {
        let (geometry, text_id) = full
            .feature
            .map(|f| (f.geometry, f.id))
            .unwrap_or_default();
        let location = full.location.unwrap_or_default();

        Self {
            geometry,
            text_id,
            attestations: location.attestations,
            start_date: location.start,
            end_date: location.end,
            archaeological_remains: location.archaeological_remains,
            connections: full.connections,
            names: full.names,
            id: full.id,
            subjects: full.subjects,
            title: full.title,
            details: full.details,
            uri: full.uri,
            description: full.description,
            place_types: full.place_types,
            bbox: full.bbox,
            repr_point: full.repr_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::new(value)
    }

    #[test]
    fn empty_record_maps_to_empty_objects() {
        let raw = record(json!({}));
        assert_eq!(map_full(&raw).unwrap(), FullRecord::default());
        assert_eq!(map_curated(&raw).unwrap(), CuratedRecord::default());
    }

    #[test]
    fn empty_values_are_omitted() {
        let raw = record(json!({
            "id": "",
            "title": null,
            "subject": [],
            "locations": [{}],
            "features": [{ "properties": {} }]
        }));
        let full = map_full(&raw).unwrap();
        assert!(full.id.is_none());
        assert!(full.title.is_none());
        assert!(full.subjects.is_none());
        assert!(full.location.is_none());
        assert!(full.feature.is_none());
    }

    #[test]
    fn empty_geometry_is_omitted() {
        let raw = record(json!({ "id": "1", "features": [{ "id": "f1", "geometry": {} }] }));

        let curated = map_curated(&raw).unwrap();
        assert!(curated.geometry.is_none());
        assert_eq!(curated.text_id.as_deref(), Some("f1"));

        let feature = map_full(&raw).unwrap().feature.unwrap();
        assert!(feature.geometry.is_none());
        assert_eq!(feature.id.as_deref(), Some("f1"));
    }

    #[test]
    fn vocabulary_tables_are_first_write_wins() {
        let raw = record(json!({
            "locations": [{
                "associationCertainty": "certain",
                "associationCertaintyURI": "https://pleiades.stoa.org/vocabularies/association-certainty/certain",
                "attestations": [
                    { "timePeriod": "roman", "timePeriodURI": "U1", "confidence": "confident", "confidenceURI": "C1" },
                    { "timePeriod": "roman", "timePeriodURI": "U2", "confidence": "less-certain", "confidenceURI": "C2" }
                ],
                "featureType": ["settlement"],
                "featureTypeURI": ["https://pleiades.stoa.org/vocabularies/place-types/settlement"]
            }]
        }));
        let full = map_full(&raw).unwrap();
        let vocab = &full.vocabulary;
        assert_eq!(vocab.time_periods.uri("roman"), Some("U1"));
        assert_eq!(vocab.confidence_metrics.len(), 2);
        assert_eq!(
            vocab.location_types.uri("settlement"),
            Some("https://pleiades.stoa.org/vocabularies/place-types/settlement")
        );
        assert_eq!(vocab.association_certainties.len(), 1);

        // the attestation table itself keeps the last confidence
        let attestations = full.location.unwrap().attestations.unwrap();
        assert_eq!(attestations.confidence("roman"), Some("less-certain"));
    }

    #[test]
    fn feature_type_uri_without_label_is_not_registered() {
        let raw = record(json!({
            "locations": [{ "featureTypeURI": ["https://pleiades.stoa.org/vocabularies/place-types/fort"] }]
        }));
        let full = map_full(&raw).unwrap();
        assert!(full.vocabulary.location_types.is_empty());
        assert!(full.location.unwrap().feature_type_uri.is_some());
    }

    #[test]
    fn connection_without_type_fails_the_record() {
        let raw = record(json!({ "id": "7", "connections": [{ "id": "8" }] }));
        match map_full(&raw).unwrap_err() {
            PleiadesError::MissingField { field, record_id } => {
                assert_eq!(field, "connections.connectionType");
                assert_eq!(record_id.as_deref(), Some("7"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn geometry_without_coordinates_is_missing_field() {
        let raw = record(json!({ "features": [{ "geometry": { "type": "Point" } }] }));
        let err = map_curated(&raw).unwrap_err();
        assert_eq!(err.field(), Some("geometry.coordinates"));
    }

    #[test]
    fn curated_ignores_malformed_full_only_keys() {
        let raw = record(json!({
            "id": "1",
            "title": "Roma",
            "provenance": 5,
            "features": [{ "id": "f1", "properties": "x" }],
            "locations": [{ "start": -753, "accuracy_value": "10" }]
        }));

        let curated = map_curated(&raw).unwrap();
        assert_eq!(curated.title.as_deref(), Some("Roma"));
        assert_eq!(curated.text_id.as_deref(), Some("f1"));
        assert_eq!(curated.start_date, Some(-753));

        // the full shape reads those keys and names the first bad one
        match map_full(&raw).unwrap_err() {
            PleiadesError::ShapeMismatch {
                field, record_id, ..
            } => {
                assert_eq!(field, "features.properties");
                assert_eq!(record_id.as_deref(), Some("1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrongly_typed_key_is_named() {
        let raw = record(json!({ "id": "1", "provenance": 5 }));
        let err = map_full(&raw).unwrap_err();
        assert_eq!(err.field(), Some("provenance"));

        let raw = record(json!({ "locations": [{ "accuracy_value": "10" }] }));
        let err = map_full(&raw).unwrap_err();
        assert_eq!(err.field(), Some("locations.accuracy_value"));
    }

    #[test]
    fn projection_matches_curated_mapping() {
        let raw = record(json!({
            "id": "2",
            "title": "Ostia",
            "features": [{ "id": "f2", "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [12.29, 41.75] } }],
            "locations": [{ "start": -620, "end": 640, "associationCertainty": "certain",
                "attestations": [{ "timePeriod": "roman", "confidence": "confident" }] }],
            "connections": [{ "id": "423025", "connectionType": "port" }],
            "bbox": [12.2, 41.7, 12.3, 41.8]
        }));
        let projected = CuratedRecord::from(map_full(&raw).unwrap());
        assert_eq!(projected, map_curated(&raw).unwrap());
    }

    #[test]
    fn map_record_selects_shape() {
        let raw = record(json!({ "id": "1" }));
        assert_eq!(map_record(&raw, RecordShape::Full).unwrap().shape(), RecordShape::Full);
        assert_eq!(
            map_record(&raw, RecordShape::Curated).unwrap().shape(),
            RecordShape::Curated
        );
    }
}
