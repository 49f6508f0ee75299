//! The traversal driver: spiral → fetch → aggregate → accumulate → write.

use std::path::PathBuf;

use voxcensus_world::{Translator, WorldProvider};

use crate::accumulate::RunAccumulator;
use crate::aggregate::{AggregatorSettings, ChunkAggregator};
use crate::spiral::{SpiralError, spiral};
use crate::table::{TableError, write_csv_file};

/// Everything a run needs besides its provider and translator.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Traversal radius in chunks around (0, 0).
    pub radius: i32,
    /// Dimension passed to every chunk fetch.
    pub dimension: String,
    /// Canonical name counted for chunks with no populated sections.
    pub empty_voxel: String,
    /// Full vertical extent of the world in voxels.
    pub world_height: u32,
    /// Output CSV path.
    pub output: PathBuf,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Chunks aggregated into the output table.
    pub processed: usize,
    /// Coordinates skipped (missing, unloadable, or unaggregatable chunks).
    pub skipped: usize,
    /// Distinct block identity keys translated during the run.
    pub distinct_blocks: usize,
    /// Distinct biome identity keys translated during the run.
    pub distinct_biomes: usize,
}

/// Errors that abort a run. Per-chunk failures never surface here; they are
/// logged and skipped inside the traversal loop.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Spiral(#[from] SpiralError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Runs the full pipeline: traverses the spiral, aggregates every chunk the
/// provider can supply, and writes the wide CSV table atomically.
pub fn run(
    provider: &mut dyn WorldProvider,
    translator: &dyn Translator,
    settings: &RunSettings,
) -> Result<RunSummary, RunError> {
    let coords = spiral(settings.radius)?;
    tracing::info!(
        total = coords.len(),
        radius = settings.radius,
        dimension = %settings.dimension,
        "starting traversal"
    );

    let mut aggregator = ChunkAggregator::new(
        translator,
        AggregatorSettings {
            empty_voxel: settings.empty_voxel.clone(),
            world_height: settings.world_height,
        },
    );
    let mut accumulator = RunAccumulator::new();
    let mut skipped = 0usize;

    for pos in coords {
        let chunk = match provider.get_chunk(pos, &settings.dimension) {
            Ok(chunk) => chunk,
            Err(err) => {
                tracing::warn!(%pos, %err, "skipping chunk");
                skipped += 1;
                continue;
            }
        };

        match aggregator.aggregate(&chunk) {
            Ok(result) => {
                tracing::debug!(%pos, biome = %result.dominant_biome, "chunk aggregated");
                accumulator.add(result);
            }
            Err(err) => {
                tracing::warn!(%pos, %err, "skipping chunk");
                skipped += 1;
            }
        }
    }

    provider.close();

    let distinct_blocks = aggregator.distinct_blocks();
    let distinct_biomes = aggregator.distinct_biomes();
    let (results, block_names) = accumulator.finalize();
    let processed = results.len();

    write_csv_file(&settings.output, &results, &block_names)?;

    tracing::info!(
        processed,
        skipped,
        distinct_blocks,
        distinct_biomes,
        output = %settings.output.display(),
        "traversal complete"
    );

    Ok(RunSummary {
        processed,
        skipped,
        distinct_blocks,
        distinct_biomes,
    })
}

#[cfg(test)]
mod tests {
    use voxcensus_world::{
        Chunk, ChunkPos, IdentityTranslator, Palette, PaletteEntry, SECTION_VOLUME, Section,
        SnapshotWorld,
    };

    use super::*;

    fn settings(radius: i32, output: PathBuf) -> RunSettings {
        RunSettings {
            radius,
            dimension: "minecraft:overworld".to_string(),
            empty_voxel: "minecraft:air".to_string(),
            world_height: 384,
            output,
        }
    }

    fn palette(names: &[&str]) -> Palette {
        Palette::new(
            names
                .iter()
                .map(|n| PaletteEntry::Named(n.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_radius_zero_missing_chunk_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![]);

        let summary = run(&mut world, &IdentityTranslator, &settings(0, output.clone())).unwrap();

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.skipped, 1);

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text, "chunk_x,chunk_z,dominant_biome\n");
    }

    #[test]
    fn test_stone_dirt_chunk_row() {
        // Sections {0, 1}: section 0 all stone, section 1 all dirt, no biome
        // data.
        let mut chunk = Chunk::new(
            ChunkPos::new(0, 0),
            palette(&["minecraft:stone", "minecraft:dirt"]),
            palette(&[]),
        );
        chunk.insert_section(0, Section::uniform(0));
        chunk.insert_section(1, Section::uniform(1));

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![chunk]);

        let summary = run(&mut world, &IdentityTranslator, &settings(0, output.clone())).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.distinct_blocks, 2);
        assert_eq!(summary.distinct_biomes, 0);

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "chunk_x,chunk_z,dominant_biome,minecraft:dirt,minecraft:stone",
                "0,0,unknown,4096,4096",
            ]
        );
    }

    #[test]
    fn test_skipped_chunks_leave_no_trace_in_columns() {
        // Only (0,0) exists; the other 8 coordinates at radius 1 are
        // skipped and contribute neither rows nor columns.
        let mut chunk = Chunk::new(ChunkPos::new(0, 0), palette(&["minecraft:stone"]), palette(&[]));
        chunk.insert_section(0, Section::uniform(0));

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![chunk]);

        let summary = run(&mut world, &IdentityTranslator, &settings(1, output.clone())).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 8);

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "chunk_x,chunk_z,dominant_biome,minecraft:stone");
    }

    #[test]
    fn test_rows_follow_spiral_order_and_union_columns() {
        let mut origin = Chunk::new(ChunkPos::new(0, 0), palette(&["minecraft:stone"]), palette(&[]));
        origin.insert_section(0, Section::uniform(0));
        let mut east = Chunk::new(ChunkPos::new(1, 0), palette(&["minecraft:dirt"]), palette(&[]));
        east.insert_section(0, Section::uniform(0));

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![east, origin]);

        run(&mut world, &IdentityTranslator, &settings(1, output.clone())).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "chunk_x,chunk_z,dominant_biome,minecraft:dirt,minecraft:stone".to_string(),
                // (0,0) is visited before (1,0) regardless of insertion order.
                format!("0,0,unknown,0,{SECTION_VOLUME}"),
                format!("1,0,unknown,{SECTION_VOLUME},0"),
            ]
        );
    }

    #[test]
    fn test_invalid_radius_fails_before_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![]);

        let err = run(&mut world, &IdentityTranslator, &settings(-2, output.clone())).unwrap_err();
        assert!(matches!(err, RunError::Spiral(SpiralError::InvalidRadius(-2))));
        // Nothing was written.
        assert!(!output.exists());
    }

    #[test]
    fn test_unwritable_output_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no_such_dir").join("out.csv");
        let mut world = SnapshotWorld::from_chunks("minecraft:overworld", vec![]);

        let err = run(&mut world, &IdentityTranslator, &settings(0, output)).unwrap_err();
        assert!(matches!(err, RunError::Table(TableError::Io { .. })));
    }
}
