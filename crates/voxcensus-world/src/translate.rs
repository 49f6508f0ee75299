//! The name-translation seam between palette entries and output names.

use crate::palette::PaletteEntry;

/// Translates canonical palette entries into stable output names.
///
/// A translation may yield several candidate names for one entry; only the
/// first candidate is used. An empty result means the entry could not be
/// translated, in which case callers fall back to the entry's own identity
/// key — translation failure is never fatal.
pub trait Translator {
    /// Candidate output names for `entry`, best first.
    fn translate(&self, entry: &PaletteEntry) -> Vec<String>;
}

/// A translator that never produces a candidate, so every entry keeps its
/// canonical identity key as its output name.
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, _entry: &PaletteEntry) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translator_yields_no_candidates() {
        let entry = PaletteEntry::Named("minecraft:stone".to_string());
        assert!(IdentityTranslator.translate(&entry).is_empty());
    }
}
