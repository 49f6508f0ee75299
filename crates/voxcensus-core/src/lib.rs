//! The voxcensus aggregation pipeline.
//!
//! Turns a voxel world into one wide CSV table: one row per chunk, one
//! column per voxel type seen anywhere in the traversal. The pipeline is
//! spiral traversal → chunk fetch → per-chunk frequency aggregation (through
//! a run-wide translation cache) → cross-chunk accumulation → two-pass wide
//! table write.

pub mod accumulate;
pub mod aggregate;
pub mod cache;
pub mod run;
pub mod spiral;
pub mod table;

pub use accumulate::RunAccumulator;
pub use aggregate::{
    AggregateError, AggregatorSettings, ChunkAggregator, ChunkResult, PaletteKind, UNKNOWN_BIOME,
};
pub use cache::TranslationCache;
pub use run::{RunError, RunSettings, RunSummary, run};
pub use spiral::{Spiral, SpiralError, spiral};
pub use table::{TableError, render_csv, write_csv_file};
