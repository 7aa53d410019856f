// crates/pleiades-core/src/traits.rs
use crate::model::{CuratedRecord, FullRecord, MappedRecord, Name};
use crate::text::fold_key;

/// Read access shared by both record shapes.
///
/// Absent fields come back as `None` or an empty slice, so callers can walk
/// a mixed corpus without matching on the shape.
pub trait PlaceView {
    fn id(&self) -> Option<&str>;
    fn title(&self) -> Option<&str>;
    fn names(&self) -> &[Name];
    fn place_types(&self) -> &[String];

    /// The conventionally principal (first listed) name.
    fn principal_name(&self) -> Option<&Name> {
        self.names().first()
    }
}

impl PlaceView for FullRecord {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    fn names(&self) -> &[Name] {
        self.names.as_deref().unwrap_or_default()
    }
    fn place_types(&self) -> &[String] {
        self.place_types.as_deref().unwrap_or_default()
    }
}

impl PlaceView for CuratedRecord {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    fn names(&self) -> &[Name] {
        self.names.as_deref().unwrap_or_default()
    }
    fn place_types(&self) -> &[String] {
        self.place_types.as_deref().unwrap_or_default()
    }
}

impl PlaceView for MappedRecord {
    fn id(&self) -> Option<&str> {
        match self {
            Self::Full(r) => r.id(),
            Self::Curated(r) => r.id(),
        }
    }
    fn title(&self) -> Option<&str> {
        match self {
            Self::Full(r) => r.title(),
            Self::Curated(r) => r.title(),
        }
    }
    fn names(&self) -> &[Name] {
        match self {
            Self::Full(r) => r.names(),
            Self::Curated(r) => r.names(),
        }
    }
    fn place_types(&self) -> &[String] {
        match self {
            Self::Full(r) => r.place_types(),
            Self::Curated(r) => r.place_types(),
        }
    }
}

/// Name-based matching helpers for types that expose a canonical name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`]. Implementors provide the canonical name and, optionally,
/// alternate spellings that also count as a match.
///
/// # Examples
/// ```rust
/// use pleiades_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Rōma").is_named("roma"));
/// assert!(Place("Lugdūnum").name_contains("dunu"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Further spellings that should match as well.
    fn alternate_names(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Accent-insensitive and case-insensitive name comparison.
    fn is_named(&self, q: &str) -> bool {
        let q = fold_key(q);
        fold_key(self.name_str()) == q || self.alternate_names().iter().any(|n| fold_key(n) == q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        fold_key(self.name_str()).contains(&q)
            || self
                .alternate_names()
                .iter()
                .any(|n| fold_key(n).contains(&q))
    }
}

impl NameMatch for Name {
    fn name_str(&self) -> &str {
        &self.name_attested
    }

    fn alternate_names(&self) -> Vec<&str> {
        self.romanized_variants().collect()
    }
}

/// Places match on their title or on any of their names.
fn place_alternates<P: PlaceView>(place: &P) -> Vec<&str> {
    place
        .names()
        .iter()
        .flat_map(|n| std::iter::once(n.name_attested.as_str()).chain(n.romanized_variants()))
        .filter(|s| !s.is_empty())
        .collect()
}

impl NameMatch for FullRecord {
    fn name_str(&self) -> &str {
        PlaceView::title(self).unwrap_or_default()
    }
    fn alternate_names(&self) -> Vec<&str> {
        place_alternates(self)
    }
}

impl NameMatch for CuratedRecord {
    fn name_str(&self) -> &str {
        PlaceView::title(self).unwrap_or_default()
    }
    fn alternate_names(&self) -> Vec<&str> {
        place_alternates(self)
    }
}

impl NameMatch for MappedRecord {
    fn name_str(&self) -> &str {
        PlaceView::title(self).unwrap_or_default()
    }
    fn alternate_names(&self) -> Vec<&str> {
        place_alternates(self)
    }
}
