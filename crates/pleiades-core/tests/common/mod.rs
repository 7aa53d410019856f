#![allow(dead_code)]

use pleiades_core::RawRecord;
use serde_json::{json, Value};

pub fn name_json(attested: &str, romanized: &str, period: &str, confidence: &str) -> Value {
    json!({
        "nameType": "geographic",
        "transcriptionAccuracy": "accurate",
        "associationCertainty": "certain",
        "romanized": romanized,
        "attestations": [{
            "timePeriod": period,
            "timePeriodURI": format!("https://pleiades.stoa.org/vocabularies/time-periods/{period}"),
            "confidence": confidence,
            "confidenceURI": format!("https://pleiades.stoa.org/vocabularies/attestation-confidence/{confidence}")
        }],
        "id": attested.to_lowercase(),
        "transcriptionCompleteness": "complete",
        "language": "la",
        "description": "",
        "uri": format!("https://pleiades.stoa.org/places/x/{}", attested.to_lowercase()),
        "attested": attested
    })
}

/// A record with every optional field present.
pub fn place_json(id: &str, title: &str) -> Value {
    json!({
        "@type": "Place",
        "type": "FeatureCollection",
        "id": id,
        "uri": format!("https://pleiades.stoa.org/places/{id}"),
        "title": title,
        "description": format!("{title}, an ancient place"),
        "details": "<p>details</p>",
        "provenance": "Barrington Atlas: BAtlas 43 B2 Roma",
        "subject": ["dare:ancient=1", "dare:major=1"],
        "placeTypes": ["settlement", "urban"],
        "bbox": [12.4, 41.8, 12.6, 41.95],
        "reprPoint": [12.48, 41.89],
        "features": [{
            "type": "Feature",
            "id": format!("darmc-location-{id}"),
            "geometry": { "type": "Point", "coordinates": [12.48, 41.89] },
            "properties": {
                "snippet": "Settlement; 750 BC - AD 640",
                "link": format!("https://pleiades.stoa.org/places/{id}/darmc-location"),
                "description": "DARMC location",
                "location_precision": "precise",
                "title": "DARMC location"
            }
        }],
        "locations": [{
            "@type": "Location",
            "id": "darmc-location",
            "uri": format!("https://pleiades.stoa.org/places/{id}/darmc-location"),
            "title": "DARMC location",
            "associationCertainty": "certain",
            "associationCertaintyURI": "https://pleiades.stoa.org/vocabularies/association-certainty/certain",
            "attestations": [{
                "timePeriod": "roman",
                "timePeriodURI": "https://pleiades.stoa.org/vocabularies/time-periods/roman",
                "confidence": "confident",
                "confidenceURI": "https://pleiades.stoa.org/vocabularies/attestation-confidence/confident"
            }],
            "featureType": ["settlement"],
            "featureTypeURI": ["https://pleiades.stoa.org/vocabularies/place-types/settlement"],
            "locationType": ["representative"],
            "start": -753,
            "end": 1453,
            "archaeologicalRemains": "substantive",
            "details": "",
            "accuracy_value": 10.0,
            "description": "point location"
        }],
        "connections": [
            { "id": "422995", "connectionType": "at" },
            { "id": "423024", "connectionType": "connection" }
        ],
        "names": [
            name_json(title, title, "roman", "confident"),
        ]
    })
}

pub fn raw(value: Value) -> RawRecord {
    RawRecord::new(value)
}

pub fn envelope(records: Vec<Value>) -> Value {
    json!({
        "@context": { "@vocab": "https://pleiades.stoa.org/places/vocab#" },
        "@graph": records
    })
}
