//! Outward square-spiral traversal order over the chunk grid.

use voxcensus_world::ChunkPos;

/// Errors raised when constructing a spiral traversal.
#[derive(Debug, thiserror::Error)]
pub enum SpiralError {
    /// The requested radius was negative.
    #[error("traversal radius must be non-negative, got {0}")]
    InvalidRadius(i32),
}

/// Creates the spiral traversal for the given radius.
///
/// The iterator starts at `(0, 0)` and spirals outward clockwise, visiting
/// every coordinate with `max(|x|, |z|) <= radius` exactly once — exactly
/// `(2·radius + 1)²` coordinates in total.
pub fn spiral(radius: i32) -> Result<Spiral, SpiralError> {
    if radius < 0 {
        return Err(SpiralError::InvalidRadius(radius));
    }
    let side = 2 * radius as u64 + 1;
    Ok(Spiral {
        x: 0,
        z: 0,
        dx: 0,
        dz: -1,
        remaining: side * side,
    })
}

/// Iterator over chunk coordinates in outward square-spiral order.
#[derive(Debug, Clone)]
pub struct Spiral {
    x: i32,
    z: i32,
    dx: i32,
    dz: i32,
    remaining: u64,
}

impl Iterator for Spiral {
    type Item = ChunkPos;

    fn next(&mut self) -> Option<ChunkPos> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pos = ChunkPos::new(self.x, self.z);

        // Corner-turn condition of the classic square spiral: rotate the
        // direction 90° clockwise, then step.
        if self.x == self.z
            || (self.x < 0 && self.x == -self.z)
            || (self.x > 0 && self.x == 1 - self.z)
        {
            (self.dx, self.dz) = (-self.dz, self.dx);
        }
        self.x += self.dx;
        self.z += self.dz;

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Spiral {}
