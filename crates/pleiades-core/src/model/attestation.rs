// crates/pleiades-core/src/model/attestation.rs
use crate::error::{PleiadesError, Result};
use crate::raw::AttestationRaw;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time-period label -> confidence label.
///
/// Built in input order; a repeated time period overwrites the earlier
/// confidence (last write wins).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttestationTable(BTreeMap<String, String>);

impl AttestationTable {
    pub fn build<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (period, confidence) in pairs {
            table.insert(period.into(), confidence.into());
        }
        Self(table)
    }

    /// Validates each raw attestation and builds the table from them.
    pub(crate) fn from_raw(list: &[AttestationRaw]) -> Result<Self> {
        let pairs = list
            .iter()
            .map(AttestationRaw::labels)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(pairs))
    }

    pub fn confidence(&self, time_period: &str) -> Option<&str> {
        self.0.get(time_period).map(String::as_str)
    }

    pub fn time_periods(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AttestationRaw {
    /// `(timePeriod, confidence)`; both must be present.
    pub(crate) fn labels(&self) -> Result<(&str, &str)> {
        let period = self
            .time_period
            .as_deref()
            .ok_or_else(|| PleiadesError::missing("attestations.timePeriod"))?;
        let confidence = self
            .confidence
            .as_deref()
            .ok_or_else(|| PleiadesError::missing("attestations.confidence"))?;
        Ok((period, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_confidence_overwrites_earlier() {
        let table = AttestationTable::build([("Classical", "low"), ("Classical", "high")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.confidence("Classical"), Some("high"));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = AttestationTable::build(Vec::<(String, String)>::new());
        assert!(table.is_empty());
    }

    #[test]
    fn raw_entry_without_confidence_is_missing_field() {
        let raw = vec![AttestationRaw {
            time_period: Some("roman".into()),
            ..Default::default()
        }];
        let err = AttestationTable::from_raw(&raw).unwrap_err();
        assert_eq!(err.field(), Some("attestations.confidence"));
    }
}
