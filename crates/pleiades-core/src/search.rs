// crates/pleiades-core/src/search.rs
//! Lookups over a mapped corpus. Linear scans; a full dump is ~40k places.

use crate::text::fold_key;
use crate::traits::{NameMatch, PlaceView};

/// Finds a place by its exact record id.
pub fn find_by_id<'a, P: PlaceView>(records: &'a [P], id: &str) -> Option<&'a P> {
    let id = id.trim();
    records.iter().find(|r| r.id() == Some(id))
}

/// Places whose title or any attested/romanized name contains `query`,
/// ignoring case and diacritics. Exact matches come first.
pub fn search_by_name<'a, P>(records: &'a [P], query: &str) -> Vec<&'a P>
where
    P: PlaceView + NameMatch,
{
    let q = query.trim();
    if fold_key(q).is_empty() {
        return Vec::new();
    }

    let (mut exact, partial): (Vec<&P>, Vec<&P>) = records
        .iter()
        .filter(|r| r.name_contains(q))
        .partition(|r| r.is_named(q));
    exact.extend(partial);
    exact
}

/// Places carrying the given place type (e.g. `"settlement"`).
pub fn filter_by_place_type<'a, P: PlaceView>(records: &'a [P], place_type: &str) -> Vec<&'a P> {
    records
        .iter()
        .filter(|r| r.place_types().iter().any(|t| t.eq_ignore_ascii_case(place_type)))
        .collect()
}
