//! Startup terrain population, built only from `fill_block`.

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::position::BlockPos;
use super::{World, WorldError};

/// Shape of a flat world: a dirt slab capped by one row of grass, resting on
/// one row of bedrock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatTerrain {
    pub min_x: i64,
    pub max_x: i64,
    /// Row holding the grass surface.
    pub surface_y: i64,
    /// Dirt rows between the grass and the bedrock floor.
    pub depth: i64,
}

impl Default for FlatTerrain {
    fn default() -> Self {
        Self {
            min_x: -64,
            max_x: 63,
            surface_y: 0,
            depth: 8,
        }
    }
}

impl FlatTerrain {
    /// Row holding the bedrock floor.
    pub fn floor_y(&self) -> i64 {
        self.surface_y - self.depth.max(0) - 1
    }
}

pub fn generate_flat(world: &mut World, terrain: &FlatTerrain) -> Result<(), WorldError> {
    let floor_y = terrain.floor_y();
    if terrain.depth > 0 {
        world.fill_block(
            BlockPos::new(terrain.min_x, floor_y + 1),
            BlockPos::new(terrain.max_x, terrain.surface_y - 1),
            Block::Dirt,
        )?;
    }
    world.fill_block(
        BlockPos::new(terrain.min_x, terrain.surface_y),
        BlockPos::new(terrain.max_x, terrain.surface_y),
        Block::Grass,
    )?;
    world.fill_block(
        BlockPos::new(terrain.min_x, floor_y),
        BlockPos::new(terrain.max_x, floor_y),
        Block::Bedrock,
    )?;

    tracing::debug!(
        "Generated flat terrain x={}..={} surface y={} ({} chunks)",
        terrain.min_x,
        terrain.max_x,
        terrain.surface_y,
        world.chunk_count()
    );
    Ok(())
}
