//! World data model and external-collaborator interfaces for voxcensus.
//!
//! Defines the palette-indexed chunk representation the aggregation pipeline
//! consumes, plus the two seams to the outside world: [`WorldProvider`]
//! (chunk access) and [`Translator`] (palette entry → canonical name).

pub mod chunk;
pub mod coords;
pub mod palette;
pub mod provider;
pub mod snapshot;
pub mod translate;

pub use chunk::{BiomeSection, Chunk, ChunkDataError, SECTION_SIZE, SECTION_VOLUME, Section};
pub use coords::ChunkPos;
pub use palette::{Palette, PaletteEntry};
pub use provider::{WorldError, WorldProvider};
pub use snapshot::SnapshotWorld;
pub use translate::{IdentityTranslator, Translator};
