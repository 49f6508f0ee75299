//! A [`WorldProvider`] backed by a RON world snapshot.
//!
//! A snapshot is the whole dataset decoded up front: a dimension name and a
//! list of chunks in the crate's own data model. It serves as the bundled
//! provider for the exporter binary and as the fixture provider in pipeline
//! tests; a region-file decoder would implement the same trait.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::coords::ChunkPos;
use crate::provider::{WorldError, WorldProvider};

/// On-disk form of a snapshot world.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    dimension: String,
    chunks: Vec<Chunk>,
}

/// An in-memory world loaded from a RON snapshot file.
#[derive(Debug)]
pub struct SnapshotWorld {
    dimension: String,
    chunks: FxHashMap<ChunkPos, Chunk>,
}

impl SnapshotWorld {
    /// Opens a snapshot file, decoding every chunk eagerly.
    pub fn open(path: &Path) -> Result<Self, WorldError> {
        let contents = std::fs::read_to_string(path).map_err(|source| WorldError::OpenIo {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SnapshotFile =
            ron::from_str(&contents).map_err(|source| WorldError::OpenParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            dimension = %file.dimension,
            chunks = file.chunks.len(),
            "opened world snapshot"
        );
        Ok(Self::from_chunks(file.dimension, file.chunks))
    }

    /// Builds a snapshot world directly from chunks (used by tests).
    pub fn from_chunks(dimension: impl Into<String>, chunks: Vec<Chunk>) -> Self {
        Self {
            dimension: dimension.into(),
            chunks: chunks.into_iter().map(|c| (c.pos(), c)).collect(),
        }
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl WorldProvider for SnapshotWorld {
    fn get_chunk(&mut self, pos: ChunkPos, dimension: &str) -> Result<Chunk, WorldError> {
        if dimension != self.dimension {
            return Err(WorldError::ChunkNotFound { pos });
        }
        self.chunks
            .get(&pos)
            .cloned()
            .ok_or(WorldError::ChunkNotFound { pos })
    }
}
