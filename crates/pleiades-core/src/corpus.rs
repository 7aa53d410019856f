// crates/pleiades-core/src/corpus.rs
//! # Corpus Mapper
//!
//! Applies the record mapper to every record of a retrieved dump, in input
//! order. Records share no state, so the outcome of one never affects
//! another.

use crate::error::{PleiadesError, Result};
use crate::model::{map_record, MappedRecord, RecordShape};
use crate::raw::RawRecord;
use tracing::{debug, warn};

/// What to do when a single record fails to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusPolicy {
    /// Fail the whole corpus on the first bad record.
    #[default]
    FailFast,
    /// Keep the records that mapped and report the rest.
    SkipInvalid,
}

/// A record that was left out under [`CorpusPolicy::SkipInvalid`].
#[derive(Debug)]
pub struct RecordFailure {
    /// Position in the input sequence.
    pub index: usize,
    pub record_id: Option<String>,
    pub error: PleiadesError,
}

/// Outcome of [`map_corpus_lenient`].
#[derive(Debug, Default)]
pub struct CorpusReport {
    /// Successfully mapped records, in input order.
    pub records: Vec<MappedRecord>,
    pub failures: Vec<RecordFailure>,
}

impl CorpusReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Maps every record, failing on the first error. The output has one entry
/// per input record, in the same order.
pub fn map_corpus(records: &[RawRecord], shape: RecordShape) -> Result<Vec<MappedRecord>> {
    debug!(count = records.len(), ?shape, "mapping corpus (fail-fast)");
    records.iter().map(|r| map_record(r, shape)).collect()
}

/// Maps every record, collecting per-record failures instead of aborting.
pub fn map_corpus_lenient(records: &[RawRecord], shape: RecordShape) -> CorpusReport {
    debug!(count = records.len(), ?shape, "mapping corpus (skip invalid)");
    let mut report = CorpusReport::default();

    for (index, raw) in records.iter().enumerate() {
        match map_record(raw, shape) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                warn!(index, id = ?raw.id(), %error, "skipping record");
                report.failures.push(RecordFailure {
                    index,
                    record_id: raw.id().map(str::to_owned),
                    error,
                });
            }
        }
    }
    report
}

/// Dispatches on the policy. `FailFast` yields an empty failure list.
pub fn map_corpus_with(
    records: &[RawRecord],
    shape: RecordShape,
    policy: CorpusPolicy,
) -> Result<CorpusReport> {
    match policy {
        CorpusPolicy::FailFast => Ok(CorpusReport {
            records: map_corpus(records, shape)?,
            failures: Vec::new(),
        }),
        CorpusPolicy::SkipInvalid => Ok(map_corpus_lenient(records, shape)),
    }
}
