//! Basic usage example for pleiades-rs
//!
//! This example demonstrates how to:
//! - Parse a (tiny) Pleiades dump
//! - Map places into the curated and the full shape
//! - Look up vocabularies and attestations
//! - Search by ancient or modern name

use pleiades_core::{
    map_corpus, map_full, parse_envelope, search_by_name, NameMatch, PlaceView, RecordShape,
    Result,
};

const DUMP: &str = r#"{
  "@graph": [
    {
      "id": "423025",
      "title": "Roma",
      "placeTypes": ["settlement"],
      "bbox": [12.4, 41.8, 12.6, 42.0],
      "reprPoint": [12.48, 41.89],
      "locations": [{
        "start": -753,
        "end": 1453,
        "associationCertainty": "certain",
        "associationCertaintyURI": "https://pleiades.stoa.org/vocabularies/association-certainty/certain",
        "attestations": [{
          "timePeriod": "roman",
          "timePeriodURI": "https://pleiades.stoa.org/vocabularies/time-periods/roman",
          "confidence": "confident",
          "confidenceURI": "https://pleiades.stoa.org/vocabularies/attestation-confidence/confident"
        }]
      }],
      "connections": [{ "id": "422995", "connectionType": "connection" }],
      "names": [{
        "nameType": "geographic",
        "attested": "Rōma",
        "romanized": "Roma, Rome",
        "attestations": [{ "timePeriod": "roman", "confidence": "confident" }],
        "transcriptionAccuracy": "accurate",
        "associationCertainty": "certain",
        "id": "roma",
        "transcriptionCompleteness": "complete",
        "language": "la",
        "description": "Latin name of the city",
        "uri": "https://pleiades.stoa.org/places/423025/roma"
      }]
    },
    { "id": "422995", "title": "Ostia", "placeTypes": ["port"] }
  ]
}"#;

fn main() -> Result<()> {
    println!("=== Pleiades-RS Basic Usage Example ===\n");

    // A real dump comes from `RetrievalAdapter::new().retrieve(DEFAULT_DATA_URL)`
    let raw = parse_envelope(DUMP.as_bytes())?;
    println!("✓ Parsed {} raw records\n", raw.len());

    // Example 1: Curated shape
    println!("--- Example 1: Curated places ---");
    let places = map_corpus(&raw, RecordShape::Curated)?;
    for place in &places {
        println!(
            "- {} ({}) types: {:?}",
            place.title().unwrap_or("(untitled)"),
            place.id().unwrap_or("?"),
            place.place_types()
        );
    }
    println!();

    // Example 2: Full shape with per-record vocabularies
    println!("--- Example 2: Full record for Roma ---");
    let roma = map_full(&raw[0])?;
    if let Some(location) = &roma.location {
        println!("Dates: {:?} to {:?}", location.start, location.end);
    }
    for (period, uri) in roma.vocabulary.time_periods.iter() {
        println!("Time period {period}: {uri}");
    }
    if let Some(connections) = &roma.connections {
        for (id, relation) in connections.iter() {
            println!("Connected to {id} ({relation})");
        }
    }
    println!();

    // Example 3: Names and their attestations
    println!("--- Example 3: Names ---");
    for name in roma.names() {
        println!("{} [{}]", name.name_attested, name.language);
        for variant in name.alternate_names() {
            println!("  also: {variant}");
        }
        for (period, confidence) in name.attestations.iter() {
            println!("  attested {period}: {confidence}");
        }
    }
    println!();

    // Example 4: Accent-insensitive search
    println!("--- Example 4: Search for 'rome' ---");
    for hit in search_by_name(&places, "rome") {
        println!("- {}", hit.title().unwrap_or("(untitled)"));
    }

    Ok(())
}
