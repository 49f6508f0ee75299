//! Palette-indexed chunk storage: a 16×16 column of 16×16×16 voxel sections.
//!
//! Each chunk carries one block palette and one biome palette; its sections
//! store flattened arrays of indices into those palettes. Populated sections
//! are sparse — a chunk may have gaps in its vertical section range, or no
//! sections at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coords::ChunkPos;
use crate::palette::Palette;

/// Side length of a chunk section in voxels.
pub const SECTION_SIZE: usize = 16;

/// Total number of voxels in a section (16³).
pub const SECTION_VOLUME: usize = SECTION_SIZE * SECTION_SIZE * SECTION_SIZE;

/// Errors raised when constructing chunk data from raw arrays.
#[derive(Debug, thiserror::Error)]
pub enum ChunkDataError {
    /// A voxel section's flattened array was not exactly 16³ long.
    #[error("section has {actual} voxels, expected {SECTION_VOLUME}")]
    WrongSectionVolume {
        /// Actual element count received.
        actual: usize,
    },
    /// A biome section carried no data at all.
    #[error("biome section is empty")]
    EmptyBiomeSection,
}

/// A 16×16×16 voxel section as a flattened array of block-palette indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    indices: Vec<u32>,
}

impl Section {
    /// Wraps a flattened index array. The array must hold exactly 16³ values.
    pub fn new(indices: Vec<u32>) -> Result<Self, ChunkDataError> {
        if indices.len() != SECTION_VOLUME {
            return Err(ChunkDataError::WrongSectionVolume {
                actual: indices.len(),
            });
        }
        Ok(Self { indices })
    }

    /// A section filled entirely with one palette index.
    pub fn uniform(index: u32) -> Self {
        Self {
            indices: vec![index; SECTION_VOLUME],
        }
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

/// Biome data for one section, as a flattened array of biome-palette indices.
///
/// Biome storage is commonly coarser than voxel storage (e.g. 4×4×4 cells);
/// no particular resolution is assumed beyond being non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeSection {
    indices: Vec<u32>,
}

impl BiomeSection {
    pub fn new(indices: Vec<u32>) -> Result<Self, ChunkDataError> {
        if indices.is_empty() {
            return Err(ChunkDataError::EmptyBiomeSection);
        }
        Ok(Self { indices })
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}

/// One chunk: sparse voxel sections, sparse biome sections, and the two
/// chunk-local palettes their indices point into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pos: ChunkPos,
    sections: BTreeMap<i32, Section>,
    biome_sections: BTreeMap<i32, BiomeSection>,
    block_palette: Palette,
    biome_palette: Palette,
}

impl Chunk {
    /// Creates a chunk with no populated sections.
    pub fn new(pos: ChunkPos, block_palette: Palette, biome_palette: Palette) -> Self {
        Self {
            pos,
            sections: BTreeMap::new(),
            biome_sections: BTreeMap::new(),
            block_palette,
            biome_palette,
        }
    }

    /// Inserts (or replaces) the voxel section at vertical index `y`.
    pub fn insert_section(&mut self, y: i32, section: Section) {
        self.sections.insert(y, section);
    }

    /// Inserts (or replaces) the biome section at vertical index `y`.
    pub fn insert_biome_section(&mut self, y: i32, section: BiomeSection) {
        self.biome_sections.insert(y, section);
    }

    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    /// Inclusive `(min, max)` vertical range spanning all populated voxel
    /// sections, or `None` when the chunk has no populated sections.
    pub fn section_range(&self) -> Option<(i32, i32)> {
        let min = *self.sections.keys().next()?;
        let max = *self.sections.keys().next_back()?;
        Some((min, max))
    }

    pub fn section(&self, y: i32) -> Option<&Section> {
        self.sections.get(&y)
    }

    pub fn biome_section(&self, y: i32) -> Option<&BiomeSection> {
        self.biome_sections.get(&y)
    }

    pub fn block_palette(&self) -> &Palette {
        &self.block_palette
    }

    pub fn biome_palette(&self) -> &Palette {
        &self.biome_palette
    }
}
