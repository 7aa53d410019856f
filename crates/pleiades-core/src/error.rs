// crates/pleiades-core/src/error.rs
use thiserror::Error;

/// Errors raised while retrieving or mapping a Pleiades dump.
///
/// `MissingField` and `ShapeMismatch` are fatal to the single record being
/// mapped. Absent *optional* fields never produce an error; they are simply
/// left out of the output object.
#[derive(Debug, Error)]
pub enum PleiadesError {
    /// A structurally required field is absent (or `null`).
    #[error("missing required field `{field}`{}", fmt_record(.record_id))]
    MissingField {
        field: String,
        record_id: Option<String>,
    },

    /// A field has the wrong type or arity (e.g. a bounding box of 3 numbers).
    #[error("field `{field}` has an unexpected shape{}: {detail}", fmt_record(.record_id))]
    ShapeMismatch {
        field: String,
        record_id: Option<String>,
        detail: String,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("http error: {0}")]
    Http(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn fmt_record(record_id: &Option<String>) -> String {
    match record_id {
        Some(id) => format!(" in record {id}"),
        None => String::new(),
    }
}

impl PleiadesError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            record_id: None,
        }
    }

    pub fn shape(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            field: field.into(),
            record_id: None,
            detail: detail.into(),
        }
    }

    /// Attaches the id of the record being mapped, unless one is already set.
    pub fn in_record(self, id: Option<&str>) -> Self {
        match self {
            Self::MissingField {
                field,
                record_id: None,
            } => Self::MissingField {
                field,
                record_id: id.map(str::to_owned),
            },
            Self::ShapeMismatch {
                field,
                record_id: None,
                detail,
            } => Self::ShapeMismatch {
                field,
                record_id: id.map(str::to_owned),
                detail,
            },
            other => other,
        }
    }

    /// The offending field name, for the two record-level error kinds.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } | Self::ShapeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PleiadesError>;
