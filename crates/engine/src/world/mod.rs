pub mod block;
pub mod chunk;
pub mod generation;
pub mod position;
pub mod terrain;
pub mod view;

use block::Block;
use chunk::Chunk;
use position::{BlockPos, ChunkPos};
use serde::{Deserialize, Serialize};
use terrain::Terrain;
use thiserror::Error;

use crate::entity::{Entity, EntityId};
use crate::physics::{self, PhysicsConfig};
use crate::store::hash::hash_coordinate;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("a chunk already exists at ({}, {})", .0.x, .0.y)]
    DuplicateChunk(ChunkPos),
    #[error("entity {0} is already in the world")]
    DuplicateEntity(EntityId),
}

/// Key for both of the world's stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldKey {
    Chunk(ChunkPos),
    Entity(EntityId),
}

impl WorldKey {
    /// The world's canonical hash: coordinate pairing over the chunk
    /// position, or over the two 64-bit halves of an entity's UUID.
    pub fn hash(&self) -> u64 {
        match self {
            WorldKey::Chunk(pos) => hash_coordinate(pos.x, pos.y),
            WorldKey::Entity(id) => {
                let (hi, lo) = id.as_u64_pair();
                hash_coordinate(hi as i64, lo as i64)
            }
        }
    }
}

/// Bucket counts for the world's two stores. Fixed for the world's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub chunk_buckets: usize,
    pub entity_buckets: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_buckets: 1024,
            entity_buckets: 64,
        }
    }
}

/// The whole simulation space: terrain chunks plus the entities living in it.
///
/// Owns every chunk and entity reachable through it. Dropping the world
/// drops all of them.
pub struct World {
    terrain: Terrain,
    entities: Store<WorldKey, Entity>,
}

impl World {
    pub fn new() -> Result<Self, WorldError> {
        Self::with_config(&WorldConfig::default())
    }

    pub fn with_config(config: &WorldConfig) -> Result<Self, WorldError> {
        Ok(Self {
            terrain: Terrain::new(config.chunk_buckets)?,
            entities: Store::new(config.entity_buckets)?,
        })
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    // ── Terrain ─────────────────────────────────────────────────────────

    pub fn get_chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.terrain.get_chunk(pos)
    }

    pub fn put_chunk(&mut self, chunk: Chunk) -> Result<(), WorldError> {
        self.terrain.put_chunk(chunk)
    }

    /// Read a block at an absolute position. Returns air for missing chunks.
    pub fn get_block(&self, pos: BlockPos) -> Block {
        self.terrain.get_block(pos)
    }

    /// Write a block at an absolute position. Creates the chunk if needed.
    pub fn set_block(&mut self, pos: BlockPos, block: Block) -> Result<(), WorldError> {
        self.terrain.set_block(pos, block)
    }

    pub fn fill_block(&mut self, a: BlockPos, b: BlockPos, block: Block) -> Result<(), WorldError> {
        self.terrain.fill_block(a, b, block)
    }

    pub fn chunk_count(&self) -> usize {
        self.terrain.chunk_count()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.terrain.chunks()
    }

    // ── Entities ────────────────────────────────────────────────────────

    /// Hand an entity to the world. The world owns it from here on.
    pub fn spawn(&mut self, entity: Entity) -> Result<EntityId, WorldError> {
        let id = entity.id();
        let kind = entity.kind_name();
        let key = WorldKey::Entity(id);
        let hash = key.hash();
        if self.entities.contains_key(&key, hash) {
            return Err(WorldError::DuplicateEntity(id));
        }
        self.entities.put(key, entity, hash)?;
        tracing::debug!("Spawned {} {}", kind, id);
        Ok(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        let key = WorldKey::Entity(id);
        self.entities.get(&key, key.hash())
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let key = WorldKey::Entity(id);
        self.entities.get_mut(&key, key.hash())
    }

    /// Take an entity out of the world, returning ownership to the caller.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let key = WorldKey::Entity(id);
        self.entities.remove(&key, key.hash())
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|(_, entity)| entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // ── Motion ──────────────────────────────────────────────────────────

    /// Advance one entity by `dt` seconds. Unknown ids are a no-op.
    pub fn step_entity(&mut self, id: EntityId, dt: f64, config: &PhysicsConfig) {
        let key = WorldKey::Entity(id);
        if let Some(entity) = self.entities.get_mut(&key, key.hash()) {
            physics::step(entity, &self.terrain, dt, config);
        }
    }

    /// Advance every entity by `dt` seconds.
    pub fn step_entities(&mut self, dt: f64, config: &PhysicsConfig) {
        for entity in self.entities.values_mut() {
            physics::step(entity, &self.terrain, dt, config);
        }
    }

    /// Whether any part of the entity's hitbox overlaps a solid block.
    /// Unknown ids report `false`.
    pub fn is_colliding(&self, id: EntityId) -> bool {
        self.entity(id)
            .is_some_and(|entity| physics::collision::is_colliding(entity, &self.terrain))
    }

    /// Vertical position correction the entity would receive right now.
    /// Unknown ids report `0.0`.
    pub fn vertical_correction(&self, id: EntityId) -> f64 {
        self.entity(id)
            .map_or(0.0, |entity| physics::collision::vertical_correction(entity, &self.terrain))
    }

    /// Release every chunk and entity, walking both stores.
    /// Returns `(chunks, entities)` released.
    pub fn clear(&mut self) -> (usize, usize) {
        let chunks = self.terrain.clear();

        let mut entities = 0;
        let mut cursor = self.entities.cursor();
        while let Some(key) = self.entities.advance(&mut cursor).map(|(key, _)| *key) {
            self.entities.remove(&key, key.hash());
            entities += 1;
        }

        tracing::debug!("Released {} chunks and {} entities", chunks, entities);
        (chunks, entities)
    }
}
