//! Run-wide memoization of palette-entry translations.

use rustc_hash::FxHashMap;
use voxcensus_world::{PaletteEntry, Translator};

/// Memoizes palette-entry → output-name lookups for the lifetime of a run.
///
/// Keys are entry identity keys, so the same logical entry appearing in many
/// chunks' palettes is translated exactly once. Entries are never evicted;
/// growth is bounded by the number of distinct types in the world's
/// vocabulary. Voxel and biome translations use separate cache instances —
/// their keyspaces must not mix.
#[derive(Debug, Default)]
pub struct TranslationCache {
    names: FxHashMap<String, String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output name for `entry`, invoking the translator only on
    /// the first lookup of a given identity key.
    ///
    /// The first translation candidate wins; a translator yielding no
    /// candidates falls back to the entry's own identity key.
    pub fn resolve(&mut self, entry: &PaletteEntry, translator: &dyn Translator) -> &str {
        let key = entry.identity_key();
        if !self.names.contains_key(key) {
            let name = translator
                .translate(entry)
                .into_iter()
                .next()
                .unwrap_or_else(|| key.to_string());
            self.names.insert(key.to_string(), name);
        }
        &self.names[key]
    }

    /// Number of distinct identity keys translated so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
