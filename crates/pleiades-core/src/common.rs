// crates/pleiades-core/src/common.rs
use crate::model::MappedRecord;
use crate::traits::PlaceView;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a mapped corpus.
///
/// Returned by [`CorpusStats::collect`]; the counts reflect the records that
/// actually mapped, so skipped records are not included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub records: usize,
    pub names: usize,
    pub with_location: usize,
    pub with_connections: usize,
}

impl CorpusStats {
    pub fn collect(records: &[MappedRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.records += 1;
            acc.names += r.names().len();
            acc.with_location += usize::from(r.has_location());
            acc.with_connections += usize::from(r.connections().is_some());
            acc
        })
    }
}
