mod common;

use common::{envelope, place_json};
use flate2::write::GzEncoder;
use pleiades_core::{
    map_corpus, Compression, Fetcher, FileFetcher, PleiadesError, RecordShape, RetrievalAdapter,
    Result,
};
use std::io::{Cursor, Read, Write};

/// Serves a fixed document for any location.
struct StaticFetcher(Vec<u8>);

impl Fetcher for StaticFetcher {
    fn fetch(&self, _location: &str) -> Result<Box<dyn Read>> {
        Ok(Box::new(Cursor::new(self.0.clone())))
    }
}

fn dump_bytes() -> Vec<u8> {
    let doc = envelope(vec![place_json("1", "Roma"), place_json("2", "Ostia")]);
    serde_json::to_vec(&doc).unwrap()
}

fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn reads_plain_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pleiades-places.json");
    std::fs::write(&path, dump_bytes()).unwrap();

    let records = RetrievalAdapter::with_fetcher(FileFetcher)
        .retrieve(path.to_str().unwrap())
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), Some("1"));
}

#[test]
fn gz_suffix_is_decompressed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pleiades-places-latest.json.gz");
    std::fs::write(&path, gzip(&dump_bytes())).unwrap();

    let records = RetrievalAdapter::new()
        .retrieve(path.to_str().unwrap())
        .unwrap();
    let mapped = map_corpus(&records, RecordShape::Curated).unwrap();
    assert_eq!(mapped.len(), 2);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = RetrievalAdapter::with_fetcher(FileFetcher)
        .retrieve(path.to_str().unwrap())
        .unwrap_err();
    assert!(matches!(err, PleiadesError::NotFound(_)));
}

#[test]
fn injected_fetcher_needs_no_network() {
    let adapter = RetrievalAdapter::with_fetcher(StaticFetcher(gzip(&dump_bytes())))
        .compression(Compression::Gzip);
    let records = adapter.retrieve("https://example.invalid/dump").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id(), Some("2"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let adapter = RetrievalAdapter::with_fetcher(StaticFetcher(b"{\"@graph\": [".to_vec()))
        .compression(Compression::None);
    let err = adapter.retrieve("dump.json").unwrap_err();
    assert!(matches!(err, PleiadesError::Json(_)));
}
