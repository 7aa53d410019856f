// crates/pleiades-core/src/model/name.rs
use super::attestation::AttestationTable;
use crate::error::{PleiadesError, Result};
use crate::raw::NameRaw;
use serde::{Deserialize, Serialize};

/// One attested historical name of a place.
///
/// Unlike the place records, every field here is required: a name entry
/// missing any of them fails with [`PleiadesError::MissingField`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub name_type: String,
    pub transcription_accuracy: String,
    pub association_certainty: String,
    /// Romanized form(s), comma separated in the source.
    pub romanized_name: String,
    pub attestations: AttestationTable,
    pub name_id: String,
    pub transcription_completeness: String,
    /// Language / writing system code of the attested spelling.
    pub language: String,
    pub description: String,
    pub name_uri: String,
    /// Attested spelling; not necessarily the place title.
    pub name_attested: String,
}

fn required(value: &Option<String>, field: &str) -> Result<String> {
    value.clone().ok_or_else(|| PleiadesError::missing(field))
}

impl Name {
    pub(crate) fn from_raw(raw: &NameRaw) -> Result<Self> {
        let attestations = raw
            .attestations
            .as_deref()
            .ok_or_else(|| PleiadesError::missing("attestations"))
            .and_then(AttestationTable::from_raw)?;

        Ok(Self {
            name_type: required(&raw.name_type, "nameType")?,
            transcription_accuracy: required(&raw.transcription_accuracy, "transcriptionAccuracy")?,
            association_certainty: required(&raw.association_certainty, "associationCertainty")?,
            romanized_name: required(&raw.romanized, "romanized")?,
            attestations,
            name_id: required(&raw.id, "id")?,
            transcription_completeness: required(
                &raw.transcription_completeness,
                "transcriptionCompleteness",
            )?,
            language: required(&raw.language, "language")?,
            description: required(&raw.description, "description")?,
            name_uri: required(&raw.uri, "uri")?,
            name_attested: required(&raw.attested, "attested")?,
        })
    }

    /// Individual romanized spellings, e.g. `"Roma, Rome"` -> `["Roma", "Rome"]`.
    pub fn romanized_variants(&self) -> impl Iterator<Item = &str> {
        self.romanized_name
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Builds one [`Name`] per raw entry, keeping input order.
///
/// The first name is conventionally the principal one; nothing here relies
/// on that.
pub(crate) fn build_names(list: &[NameRaw]) -> Result<Vec<Name>> {
    list.iter().map(Name::from_raw).collect()
}
