use super::block::Block;
use super::position::{ChunkPos, LocalBlockPos};

/// Blocks along each side of a chunk, as an index bound.
pub const CHUNK_SIZE: usize = 16;
const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// A 16x16 square of blocks tagged with its chunk coordinates.
///
/// Stored as a flat row-major array (rows along y). A chunk's identity is
/// its position; the world never holds two chunks at the same position.
#[derive(Clone)]
pub struct Chunk {
    pos: ChunkPos,
    blocks: Box<[Block; CHUNK_AREA]>,
}

impl Chunk {
    /// A chunk at `pos` with every cell set to air.
    pub fn new(pos: ChunkPos) -> Self {
        Self::new_filled(pos, Block::Air)
    }

    pub fn new_filled(pos: ChunkPos, block: Block) -> Self {
        Self {
            pos,
            blocks: Box::new([block; CHUNK_AREA]),
        }
    }

    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    #[inline]
    const fn index(local: LocalBlockPos) -> usize {
        (local.y() as usize) * CHUNK_SIZE + (local.x() as usize)
    }

    #[inline]
    pub fn get(&self, local: LocalBlockPos) -> Block {
        self.blocks[Self::index(local)]
    }

    #[inline]
    pub fn set(&mut self, local: LocalBlockPos, block: Block) {
        self.blocks[Self::index(local)] = block;
    }

    pub fn fill(&mut self, block: Block) {
        self.blocks.fill(block);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == Block::Air)
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("pos", &self.pos)
            .field("empty", &self.is_empty())
            .finish()
    }
}
