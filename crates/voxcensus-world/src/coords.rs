//! Chunk coordinates on the XZ plane.

use serde::{Deserialize, Serialize};

/// Chunk indices on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl std::fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(ChunkPos::new(3, -7), ChunkPos::new(3, -7));
        assert_ne!(ChunkPos::new(3, -7), ChunkPos::new(-7, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(ChunkPos::new(-1, 12).to_string(), "(-1, 12)");
    }
}
