use serde::{Deserialize, Serialize};

/// Number of blocks along each side of a chunk.
pub const CHUNK_LENGTH: i64 = 16;

/// Absolute block position in the world. Cell `(x, y)` covers
/// `[x, x + 1) x [y, y + 1)` in world space; y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
}

impl BlockPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell containing a real-valued world point.
    pub fn containing(x: f64, y: f64) -> Self {
        Self::new(x.floor() as i64, y.floor() as i64)
    }

    /// The chunk this block belongs to. Floor division, so x = -1 lands in
    /// chunk -1 rather than chunk 0.
    pub const fn chunk(&self) -> ChunkPos {
        ChunkPos {
            x: self.x.div_euclid(CHUNK_LENGTH),
            y: self.y.div_euclid(CHUNK_LENGTH),
        }
    }

    /// Offset within the chunk, each axis in `0..CHUNK_LENGTH`.
    pub const fn local(&self) -> LocalBlockPos {
        let chunk = self.chunk();
        LocalBlockPos {
            x: (self.x - chunk.x * CHUNK_LENGTH) as u8,
            y: (self.y - chunk.y * CHUNK_LENGTH) as u8,
        }
    }
}

/// Chunk coordinates: adjacent chunks differ by one on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i64,
    pub y: i64,
}

impl ChunkPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// World position of the chunk's lowest-coordinate cell.
    pub const fn block_origin(&self) -> BlockPos {
        BlockPos::new(self.x * CHUNK_LENGTH, self.y * CHUNK_LENGTH)
    }

    /// Chunk containing a real-valued world coordinate pair.
    pub fn containing(x: f64, y: f64) -> Self {
        BlockPos::containing(x, y).chunk()
    }
}

/// Block position local to a chunk. Both axes are always in
/// `0..CHUNK_LENGTH`, so it indexes a chunk without bounds surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBlockPos {
    x: u8,
    y: u8,
}

impl LocalBlockPos {
    /// `None` if either axis falls outside the chunk.
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if (x as i64) < CHUNK_LENGTH && (y as i64) < CHUNK_LENGTH {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub const fn x(&self) -> u8 {
        self.x
    }

    pub const fn y(&self) -> u8 {
        self.y
    }
}
