// crates/pleiades-core/src/lib.rs
//! # pleiades-core
//!
//! Maps the [Pleiades](https://pleiades.stoa.org/) gazetteer data dump into
//! typed, read-only Rust values.
//!
//! Each place of the dump can be mapped into one of two shapes:
//! - [`FullRecord`]: every mapped field plus per-record vocabulary tables
//!   (time periods, confidence metrics, association certainties, location
//!   types).
//! - [`CuratedRecord`]: the commonly used subset.
//!
//! ```no_run
//! use pleiades_core::{map_corpus, RecordShape, RetrievalAdapter, DEFAULT_DATA_URL};
//!
//! let raw = RetrievalAdapter::new().retrieve(DEFAULT_DATA_URL)?;
//! let places = map_corpus(&raw, RecordShape::Curated)?;
//! println!("{} places", places.len());
//! # Ok::<(), pleiades_core::PleiadesError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod corpus;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
// Raw input shared by the loader and the mapper
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::CorpusStats;
pub use crate::corpus::{
    map_corpus, map_corpus_lenient, map_corpus_with, CorpusPolicy, CorpusReport, RecordFailure,
};
pub use crate::error::{PleiadesError, Result};
pub use crate::loader::{
    parse_envelope, AutoFetcher, Compression, Fetcher, FileFetcher, RetrievalAdapter,
    DEFAULT_DATA_URL,
};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpFetcher;
pub use crate::model::{
    map_curated, map_full, map_record, AttestationTable, BoundingBox, Connections, Coordinates,
    CuratedRecord, DisplayProperties, FeatureDetail, FullRecord, Geometry, LocationDetail,
    MappedRecord, Name, RecordShape, ReprPoint, Vocabulary, VocabularyTable,
};
pub use crate::raw::RawRecord;
pub use crate::search::{filter_by_place_type, find_by_id, search_by_name};
pub use crate::traits::{NameMatch, PlaceView};
