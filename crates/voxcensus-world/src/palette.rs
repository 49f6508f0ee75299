//! Chunk-local palettes mapping small integer indices to voxel/biome
//! descriptors.
//!
//! A palette entry is either a proper canonical namespaced name or, for
//! entries the provider could not name, a deterministic rendering of the
//! entry's structural representation. Both variants expose a stable
//! *identity key* used to memoize translation results across chunks.

use serde::{Deserialize, Serialize};

/// A voxel or biome descriptor from a chunk-local palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteEntry {
    /// Canonical namespaced name (e.g. `"universal_minecraft:stone"`).
    Named(String),
    /// Unnamed entry, carried as a deterministic structural rendering.
    /// Stable within a run, not guaranteed stable across runs.
    Structural(String),
}

impl PaletteEntry {
    /// The stable key identifying this entry for caching purposes.
    ///
    /// Two palette entries (possibly from different chunks) with equal
    /// identity keys denote the same logical voxel/biome type.
    pub fn identity_key(&self) -> &str {
        match self {
            PaletteEntry::Named(name) => name,
            PaletteEntry::Structural(repr) => repr,
        }
    }
}

/// An ordered, chunk-local list of palette entries.
///
/// Section data stores indices into this list. The same logical entry may
/// appear in many chunks' palettes, usually at different indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entry at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: u32) -> Option<&PaletteEntry> {
        self.entries.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<PaletteEntry>> for Palette {
    fn from(entries: Vec<PaletteEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_key_named() {
        let entry = PaletteEntry::Named("minecraft:stone".to_string());
        assert_eq!(entry.identity_key(), "minecraft:stone");
    }

    #[test]
    fn test_identity_key_structural() {
        let entry = PaletteEntry::Structural("Biome[id=42]".to_string());
        assert_eq!(entry.identity_key(), "Biome[id=42]");
    }

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::new(vec![
            PaletteEntry::Named("minecraft:air".to_string()),
            PaletteEntry::Named("minecraft:dirt".to_string()),
        ]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(1).unwrap().identity_key(), "minecraft:dirt");
        assert!(palette.get(2).is_none());
    }
}
