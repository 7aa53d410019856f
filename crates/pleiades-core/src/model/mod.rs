// crates/pleiades-core/src/model/mod.rs
pub mod attestation;
pub mod convert;
pub mod name;
pub mod record;
pub mod values;
pub mod vocabulary;

pub use attestation::AttestationTable;
pub use convert::{map_curated, map_full, map_record};
pub use name::Name;
pub use record::{CuratedRecord, FeatureDetail, FullRecord, LocationDetail, MappedRecord, RecordShape};
pub use values::{BoundingBox, Coordinates, DisplayProperties, Geometry, ReprPoint};
pub use vocabulary::{Connections, Vocabulary, VocabularyTable};
