// crates/pleiades-core/src/loader/common_io.rs
use super::{Compression, Fetcher};
use crate::error::{PleiadesError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Reads datasets from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<Box<dyn Read>> {
        Ok(Box::new(open_file(Path::new(location))?))
    }
}

pub(crate) fn open_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        PleiadesError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Wraps the stream in a gzip decoder when asked to.
pub(crate) fn decompress(stream: Box<dyn Read>, compression: Compression) -> Result<Box<dyn Read>> {
    match compression {
        Compression::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzDecoder::new(stream)))
            }
            #[cfg(not(feature = "compact"))]
            {
                drop(stream);
                Err(PleiadesError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
        Compression::None | Compression::Auto => Ok(stream),
    }
}
