//! Per-chunk frequency aggregation: raw palette-indexed sections in, a
//! name-keyed block count table and a dominant-biome decision out.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use voxcensus_world::{Chunk, ChunkPos, SECTION_SIZE, SECTION_VOLUME, Translator};

use crate::cache::TranslationCache;

/// Dominant-biome sentinel for chunks with no biome data.
pub const UNKNOWN_BIOME: &str = "unknown";

/// Tunables for the aggregator, sourced from configuration.
#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    /// Canonical name counted for chunks with no populated sections.
    pub empty_voxel: String,
    /// Full vertical extent of the world in voxels; the empty-chunk
    /// fallback volume is `16 × 16 × world_height`.
    pub world_height: u32,
}

/// Errors that make a single chunk unusable. The traversal logs these and
/// skips the chunk; they never abort the run.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// Section data referenced an index past the end of its palette.
    #[error("chunk {pos}: {kind} palette index {index} out of range ({len} entries)")]
    PaletteIndexOutOfRange {
        pos: ChunkPos,
        /// Which palette the bad index pointed into.
        kind: PaletteKind,
        index: u32,
        /// Palette length at the time of lookup.
        len: usize,
    },
}

/// Which of a chunk's two palettes an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Block,
    Biome,
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteKind::Block => write!(f, "block"),
            PaletteKind::Biome => write!(f, "biome"),
        }
    }
}

/// The aggregated statistics for one successfully processed chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkResult {
    pub pos: ChunkPos,
    pub dominant_biome: String,
    /// Output name → voxel occurrence count within this chunk.
    pub block_counts: FxHashMap<String, u64>,
}

/// Turns chunks into [`ChunkResult`]s, owning the run's two translation
/// caches (blocks and biomes) and populating them as a side effect.
pub struct ChunkAggregator<'t> {
    translator: &'t dyn Translator,
    blocks: TranslationCache,
    biomes: TranslationCache,
    settings: AggregatorSettings,
}

impl<'t> ChunkAggregator<'t> {
    pub fn new(translator: &'t dyn Translator, settings: AggregatorSettings) -> Self {
        Self {
            translator,
            blocks: TranslationCache::new(),
            biomes: TranslationCache::new(),
            settings,
        }
    }

    /// Aggregates one chunk.
    ///
    /// A chunk with no populated sections is counted as entirely
    /// `settings.empty_voxel` over the full theoretical chunk volume, with
    /// dominant biome [`UNKNOWN_BIOME`]. Otherwise every section in the
    /// contiguous `[min, max]` populated range is scanned, with unpopulated
    /// gaps substituted by a full section of palette index 0.
    pub fn aggregate(&mut self, chunk: &Chunk) -> Result<ChunkResult, AggregateError> {
        let pos = chunk.pos();

        let Some((min_y, max_y)) = chunk.section_range() else {
            return Ok(self.empty_chunk_result(pos));
        };

        // One counting pass over palette indices for the whole chunk. The
        // BTreeMap keeps distinct-index enumeration in ascending index
        // order, making cache population and tie-breaks deterministic.
        let mut block_index_counts: BTreeMap<u32, u64> = BTreeMap::new();
        let mut biome_index_counts: BTreeMap<u32, u64> = BTreeMap::new();

        for y in min_y..=max_y {
            match chunk.section(y) {
                Some(section) => {
                    for &index in section.indices() {
                        *block_index_counts.entry(index).or_insert(0) += 1;
                    }
                }
                // Gap inside the populated range: a full section of palette
                // index 0, whatever entry 0 happens to be locally.
                None => {
                    *block_index_counts.entry(0).or_insert(0) += SECTION_VOLUME as u64;
                }
            }

            if let Some(biome_section) = chunk.biome_section(y) {
                for &index in biome_section.indices() {
                    *biome_index_counts.entry(index).or_insert(0) += 1;
                }
            }
        }

        // Resolve each distinct block index exactly once per chunk.
        let mut block_counts: FxHashMap<String, u64> = FxHashMap::default();
        for (index, count) in block_index_counts {
            let entry = chunk.block_palette().get(index).ok_or_else(|| {
                AggregateError::PaletteIndexOutOfRange {
                    pos,
                    kind: PaletteKind::Block,
                    index,
                    len: chunk.block_palette().len(),
                }
            })?;
            let name = self.blocks.resolve(entry, self.translator);
            *block_counts.entry(name.to_string()).or_insert(0) += count;
        }

        // Same for biomes, into an insertion-ordered table so ties resolve
        // to the first-seen name.
        let mut biome_table: Vec<(String, u64)> = Vec::new();
        for (index, count) in biome_index_counts {
            let entry = chunk.biome_palette().get(index).ok_or_else(|| {
                AggregateError::PaletteIndexOutOfRange {
                    pos,
                    kind: PaletteKind::Biome,
                    index,
                    len: chunk.biome_palette().len(),
                }
            })?;
            let name = self.biomes.resolve(entry, self.translator);
            match biome_table.iter_mut().find(|(n, _)| n.as_str() == name) {
                Some((_, c)) => *c += count,
                None => biome_table.push((name.to_string(), count)),
            }
        }

        Ok(ChunkResult {
            pos,
            dominant_biome: dominant_biome(&biome_table),
            block_counts,
        })
    }

    /// Distinct block identity keys translated so far.
    pub fn distinct_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Distinct biome identity keys translated so far.
    pub fn distinct_biomes(&self) -> usize {
        self.biomes.len()
    }

    fn empty_chunk_result(&self, pos: ChunkPos) -> ChunkResult {
        let volume = (SECTION_SIZE * SECTION_SIZE) as u64 * u64::from(self.settings.world_height);
        let mut block_counts = FxHashMap::default();
        block_counts.insert(self.settings.empty_voxel.clone(), volume);
        ChunkResult {
            pos,
            dominant_biome: UNKNOWN_BIOME.to_string(),
            block_counts,
        }
    }
}

/// The name with the strictly highest count; ties keep the earlier entry of
/// the insertion-ordered table. [`UNKNOWN_BIOME`] when the table is empty.
fn dominant_biome(table: &[(String, u64)]) -> String {
    let mut best: Option<(&str, u64)> = None;
    for (name, count) in table {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((name.as_str(), *count)),
        }
    }
    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| UNKNOWN_BIOME.to_string())
}
