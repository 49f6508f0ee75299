//! The chunk-access seam between the pipeline and a world dataset.

use std::path::PathBuf;

use crate::chunk::Chunk;
use crate::coords::ChunkPos;

/// Errors surfaced by a [`WorldProvider`].
///
/// `ChunkNotFound` and `ChunkLoad` are per-coordinate and recoverable: the
/// traversal logs and skips the coordinate. The `Open*` variants are fatal
/// and abort the run before traversal begins.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The world dataset could not be read from disk.
    #[error("failed to open world {path}: {source}")]
    OpenIo {
        /// Path the open was attempted on.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The world dataset was read but could not be decoded.
    #[error("failed to parse world {path}: {source}")]
    OpenParse {
        /// Path the open was attempted on.
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// No chunk exists at the requested coordinate.
    #[error("chunk {pos} does not exist")]
    ChunkNotFound { pos: ChunkPos },

    /// A chunk exists but could not be decoded.
    #[error("chunk {pos} failed to load: {reason}")]
    ChunkLoad { pos: ChunkPos, reason: String },
}

/// Read access to a world dataset's chunks.
///
/// Implementations decode on demand and return owned chunks; the pipeline
/// holds each chunk only while aggregating it.
pub trait WorldProvider {
    /// Fetches the chunk at `pos` within `dimension`.
    fn get_chunk(&mut self, pos: ChunkPos, dimension: &str) -> Result<Chunk, WorldError>;

    /// Releases any underlying resources. Called once at the end of a run.
    fn close(&mut self) {}
}
