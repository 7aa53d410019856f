//! Umbrella crate for the workspace; re-exports [`pleiades_core`] so the
//! demos can be run from the repository root.
pub use pleiades_core::*;
