mod common;

use common::{name_json, place_json, raw};
use pleiades_core::{
    map_corpus, map_corpus_lenient, map_corpus_with, CorpusPolicy, CorpusStats, PleiadesError,
    PlaceView, RecordShape,
};
use serde_json::json;

fn corpus_with_bad_record() -> Vec<pleiades_core::RawRecord> {
    let mut bad_name = name_json("Ostia", "Ostia", "roman", "confident");
    bad_name.as_object_mut().unwrap().remove("language");

    vec![
        raw(place_json("1", "Roma")),
        raw(json!({ "id": "2", "names": [bad_name] })),
        raw(place_json("3", "Antium")),
    ]
}

#[test]
fn fail_fast_returns_the_first_error() {
    let err = map_corpus(&corpus_with_bad_record(), RecordShape::Full).unwrap_err();
    match err {
        PleiadesError::MissingField { field, record_id } => {
            assert_eq!(field, "language");
            assert_eq!(record_id.as_deref(), Some("2"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lenient_mapping_skips_and_reports() {
    let report = map_corpus_lenient(&corpus_with_bad_record(), RecordShape::Curated);

    assert!(!report.is_clean());
    let ids: Vec<_> = report.records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, [Some("1"), Some("3")]);

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.index, 1);
    assert_eq!(failure.record_id.as_deref(), Some("2"));
    assert_eq!(failure.error.field(), Some("language"));
}

#[test]
fn policy_dispatch() {
    let records = corpus_with_bad_record();
    assert!(map_corpus_with(&records, RecordShape::Full, CorpusPolicy::FailFast).is_err());

    let report = map_corpus_with(&records, RecordShape::Full, CorpusPolicy::SkipInvalid).unwrap();
    assert_eq!(report.records.len(), 2);
    assert!(report.records.iter().all(|r| r.as_full().is_some()));
}

#[test]
fn wrongly_typed_record_fails_alone_under_lenient_policy() {
    let records = vec![
        raw(json!({ "id": "1", "placeTypes": "settlement" })),
        raw(json!({ "id": "2", "title": "Ostia" })),
    ];
    let report = map_corpus_lenient(&records, RecordShape::Curated);
    assert_eq!(report.records.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        PleiadesError::ShapeMismatch { .. }
    ));
}

#[test]
fn empty_corpus_maps_to_nothing() {
    assert!(map_corpus(&[], RecordShape::Curated).unwrap().is_empty());
}

#[test]
fn stats_count_mapped_records() {
    let records = vec![
        raw(place_json("1", "Roma")),
        raw(json!({ "id": "2" })),
    ];
    let mapped = map_corpus(&records, RecordShape::Curated).unwrap();
    let stats = CorpusStats::collect(&mapped);

    assert_eq!(stats.records, 2);
    assert_eq!(stats.names, 1);
    assert_eq!(stats.with_location, 1);
    assert_eq!(stats.with_connections, 1);
}
