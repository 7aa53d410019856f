// crates/pleiades-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Rōma` -> `Roma`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate for a best-effort
/// transliteration.
///
/// # Examples
///
/// ```rust
/// use pleiades_core::text::fold_key;
///
/// assert_eq!(fold_key("Rōma"), "roma");
/// assert_eq!(fold_key("Čarnuntum"), "carnuntum");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// ```rust
/// use pleiades_core::text::equals_folded;
///
/// assert!(equals_folded("Lugdunum", "LUGDUNUM"));
/// assert!(!equals_folded("Roma", "Ostia"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_macrons_and_case() {
        assert!(equals_folded("Rōma", "roma"));
        assert!(equals_folded("Lugdūnum", "LUGDUNUM"));
        assert!(!equals_folded("Roma", "Ostia"));
    }
}
