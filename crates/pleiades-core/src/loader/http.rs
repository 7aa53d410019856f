// crates/pleiades-core/src/loader/http.rs
#![cfg(feature = "fetch")]

use super::Fetcher;
use crate::error::{PleiadesError, Result};
use std::io::Read;
use std::time::Duration;

/// Limit for establishing the connection; the body read has its own limit.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP(S) download of the dump.
///
/// The response body is streamed to the decompressor, never written to disk.
/// By default the download has no overall time limit, since the full dump
/// takes a while on slow links.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    timeout: Option<Duration>,
}

impl HttpFetcher {
    /// `timeout` bounds the whole request including the body; `None` lets
    /// the download run as long as data keeps arriving.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn client(&self) -> Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(self.timeout)
            .user_agent(concat!("pleiades-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PleiadesError::Http(e.to_string()))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Box<dyn Read>> {
        let response = self
            .client()?
            .get(location)
            .send()
            .map_err(|e| PleiadesError::Http(format!("GET {location}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PleiadesError::Http(format!("GET {location}: status {status}")));
        }
        Ok(Box::new(response))
    }
}
