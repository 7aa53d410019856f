// crates/pleiades-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns a location string into the list of raw records, in three
//! stages:
//!
//! 1. **Fetch** ([`Fetcher`]): local file or HTTP(S) download.
//! 2. **Decompress** ([`Compression`]): optional gzip layer.
//! 3. **Parse** ([`parse_envelope`]): read the `@graph` list out of the
//!    JSON-LD envelope.
//!
//! The mapper only ever sees the resulting `Vec<RawRecord>`.

use crate::error::{PleiadesError, Result};
use crate::raw::RawRecord;
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, info};

mod common_io;
#[cfg(feature = "fetch")]
mod http;

pub use common_io::FileFetcher;
#[cfg(feature = "fetch")]
pub use http::{HttpFetcher, CONNECT_TIMEOUT};

/// Latest full Pleiades places dump.
pub const DEFAULT_DATA_URL: &str =
    "http://atlantides.org/downloads/pleiades/json/pleiades-places-latest.json.gz";

// -----------------------------------------------------------------------------
// STAGE 1: FETCH
// -----------------------------------------------------------------------------

/// Opens a byte stream for a location (a path or a URL).
pub trait Fetcher {
    fn fetch(&self, location: &str) -> Result<Box<dyn Read>>;
}

/// HTTP(S) for URLs, the filesystem for everything else.
#[derive(Debug, Clone, Default)]
pub struct AutoFetcher {
    #[cfg(feature = "fetch")]
    http: HttpFetcher,
}

impl AutoFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given client settings for URLs.
    #[cfg(feature = "fetch")]
    pub fn with_http(http: HttpFetcher) -> Self {
        Self { http }
    }
}

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

impl Fetcher for AutoFetcher {
    fn fetch(&self, location: &str) -> Result<Box<dyn Read>> {
        if is_remote(location) {
            #[cfg(feature = "fetch")]
            {
                return self.http.fetch(location);
            }
            #[cfg(not(feature = "fetch"))]
            {
                return Err(PleiadesError::InvalidData(format!(
                    "cannot fetch {location}: 'fetch' feature disabled"
                )));
            }
        }
        FileFetcher.fetch(location)
    }
}

// -----------------------------------------------------------------------------
// STAGE 2: DECOMPRESS
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    Gzip,
    None,
    /// Gzip when the location ends in `.gz`.
    #[default]
    Auto,
}

impl Compression {
    pub fn resolve(self, location: &str) -> Self {
        match self {
            Self::Auto if location.ends_with(".gz") => Self::Gzip,
            Self::Auto => Self::None,
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// STAGE 3: PARSE
// -----------------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "@graph")]
    graph: Option<Vec<serde_json::Value>>,
}

/// Reads the dump's outer object and returns its `@graph` records.
/// Other envelope keys (`@context`, metadata) are ignored.
pub fn parse_envelope<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let envelope: Envelope = serde_json::from_reader(reader)?;
    let graph = envelope
        .graph
        .ok_or_else(|| PleiadesError::InvalidData("envelope has no `@graph` list".into()))?;
    Ok(graph.into_iter().map(RawRecord::new).collect())
}

// -----------------------------------------------------------------------------
// ADAPTER
// -----------------------------------------------------------------------------

/// Fetch -> decompress -> parse.
#[derive(Debug, Clone, Default)]
pub struct RetrievalAdapter<F: Fetcher = AutoFetcher> {
    fetcher: F,
    compression: Compression,
}

impl RetrievalAdapter<AutoFetcher> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Fetcher> RetrievalAdapter<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            compression: Compression::Auto,
        }
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn retrieve(&self, location: &str) -> Result<Vec<RawRecord>> {
        let compression = self.compression.resolve(location);
        debug!(location, ?compression, "fetching dump");

        let stream = self.fetcher.fetch(location)?;
        let reader = common_io::decompress(stream, compression)?;
        let records = parse_envelope(reader)?;

        info!(location, count = records.len(), "retrieved records");
        Ok(records)
    }
}
