use super::block::Block;
use super::chunk::Chunk;
use super::position::{BlockPos, ChunkPos};
use super::{WorldError, WorldKey};
use crate::store::{Store, StoreError};

/// The chunk half of the world: a sparse, conceptually infinite grid of
/// blocks that is all air until written.
///
/// Chunks materialize on the first write that lands in them. Reads never
/// allocate.
pub struct Terrain {
    chunks: Store<WorldKey, Chunk>,
}

impl Terrain {
    pub fn new(bucket_count: usize) -> Result<Self, StoreError> {
        Ok(Self {
            chunks: Store::new(bucket_count)?,
        })
    }

    /// Pure lookup. Never creates a chunk.
    pub fn get_chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        let key = WorldKey::Chunk(pos);
        self.chunks.get(&key, key.hash())
    }

    /// Insert a chunk at its own position. Fails if that position is taken;
    /// the existing chunk is left untouched.
    pub fn put_chunk(&mut self, chunk: Chunk) -> Result<(), WorldError> {
        let pos = chunk.pos();
        let key = WorldKey::Chunk(pos);
        let hash = key.hash();
        if self.chunks.contains_key(&key, hash) {
            tracing::warn!("Rejected duplicate chunk at ({}, {})", pos.x, pos.y);
            return Err(WorldError::DuplicateChunk(pos));
        }
        self.chunks.put(key, chunk, hash)?;
        Ok(())
    }

    /// Read a block. Missing chunks read as air.
    pub fn get_block(&self, pos: BlockPos) -> Block {
        match self.get_chunk(pos.chunk()) {
            Some(chunk) => chunk.get(pos.local()),
            None => Block::Air,
        }
    }

    /// Write a block, creating the containing chunk if it doesn't exist yet.
    pub fn set_block(&mut self, pos: BlockPos, block: Block) -> Result<(), WorldError> {
        let chunk_pos = pos.chunk();
        let key = WorldKey::Chunk(chunk_pos);
        let hash = key.hash();

        if let Some(chunk) = self.chunks.get_mut(&key, hash) {
            chunk.set(pos.local(), block);
            return Ok(());
        }

        let mut chunk = Chunk::new(chunk_pos);
        chunk.set(pos.local(), block);
        self.chunks.put(key, chunk, hash)?;
        tracing::debug!("Created chunk ({}, {})", chunk_pos.x, chunk_pos.y);
        Ok(())
    }

    /// Set every block in the inclusive rectangle spanned by two corners
    /// (given in any order).
    ///
    /// Not atomic: an error partway through leaves the rows already written
    /// in place.
    pub fn fill_block(&mut self, a: BlockPos, b: BlockPos, block: Block) -> Result<(), WorldError> {
        let (x1, x2) = (a.x.min(b.x), a.x.max(b.x));
        let (y1, y2) = (a.y.min(b.y), a.y.max(b.y));
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.set_block(BlockPos::new(x, y), block)?;
            }
        }
        Ok(())
    }

    /// Whether the block at `pos` takes part in collision.
    pub fn collides_at(&self, pos: BlockPos) -> bool {
        self.get_block(pos).collides()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Every loaded chunk, in store order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().map(|(_, chunk)| chunk)
    }

    /// Drop every chunk, walking the store and removing as it goes.
    /// Returns how many were released.
    pub(crate) fn clear(&mut self) -> usize {
        let mut released = 0;
        let mut cursor = self.chunks.cursor();
        while let Some(key) = self.chunks.advance(&mut cursor).map(|(key, _)| *key) {
            self.chunks.remove(&key, key.hash());
            released += 1;
        }
        released
    }
}
