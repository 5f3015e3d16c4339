//! Read-only visibility queries for whatever draws the world.

use serde::{Deserialize, Serialize};

use super::World;
use super::chunk::Chunk;
use super::position::{CHUNK_LENGTH, ChunkPos};
use crate::entity::Entity;

/// A rectangle of world space centred on a point, sized in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl View {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center_y + self.height / 2.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.bottom() && y <= self.top()
    }

    /// Inclusive corner chunks `(min, max)` of every chunk the view touches.
    pub fn chunk_bounds(&self) -> (ChunkPos, ChunkPos) {
        let length = CHUNK_LENGTH as f64;
        let min = ChunkPos::new(
            (self.left() / length).floor() as i64,
            (self.bottom() / length).floor() as i64,
        );
        let max = ChunkPos::new(
            (self.right() / length).floor() as i64,
            (self.top() / length).floor() as i64,
        );
        (min, max)
    }
}

impl World {
    /// Every existing chunk intersecting the view. Missing chunks are skipped,
    /// never created.
    pub fn visible_chunks(&self, view: &View) -> Vec<&Chunk> {
        let (min, max) = view.chunk_bounds();
        let mut chunks = Vec::new();
        for cy in min.y..=max.y {
            for cx in min.x..=max.x {
                if let Some(chunk) = self.get_chunk(ChunkPos::new(cx, cy)) {
                    chunks.push(chunk);
                }
            }
        }
        chunks
    }

    /// Every entity whose position lies inside the view.
    pub fn visible_entities(&self, view: &View) -> Vec<&Entity> {
        self.entities()
            .filter(|entity| view.contains(entity.x, entity.y))
            .collect()
    }
}
