//! Entity-versus-block overlap tests and positional corrections.
//!
//! A hitbox overlaps cell `(bx, by)` when it reaches strictly into
//! `[bx, bx + 1) x [by, by + 1)`: touching a cell's edge is not overlap, so
//! an entity standing exactly on a block's top surface is not colliding.

use crate::entity::Entity;
use crate::world::position::BlockPos;
use crate::world::terrain::Terrain;

/// Inclusive range of cell indices covered by the open interval `(lo, hi)`.
#[inline]
fn cell_span(lo: f64, hi: f64) -> (i64, i64) {
    (lo.floor() as i64, hi.ceil() as i64 - 1)
}

/// Whether any part of the entity's hitbox overlaps a colliding block.
pub fn is_colliding(entity: &Entity, terrain: &Terrain) -> bool {
    let (left, bottom, right, top) = entity.bounds();
    let (x0, x1) = cell_span(left, right);
    let (y0, y1) = cell_span(bottom, top);
    (y0..=y1).any(|y| (x0..=x1).any(|x| terrain.collides_at(BlockPos::new(x, y))))
}

/// Smallest vertical shift that moves the hitbox out of the first colliding
/// cell found, or `0.0` when nothing overlaps.
///
/// Rows are scanned bottom-up unless the entity is moving upward, in which
/// case they are scanned top-down, so the first hit is the cell the entity
/// ran into. For that cell both ways out are considered: up onto its top
/// surface, or down below its underside. The one with the smaller magnitude
/// wins.
pub fn vertical_correction(entity: &Entity, terrain: &Terrain) -> f64 {
    let (left, bottom, right, top) = entity.bounds();
    let (x0, x1) = cell_span(left, right);
    let (y0, y1) = cell_span(bottom, top);

    let rising = entity.velocity_y > 0.0;
    let rows = (0..=y1 - y0).map(|i| if rising { y1 - i } else { y0 + i });

    for y in rows {
        if let Some(x) = (x0..=x1).find(|&x| terrain.collides_at(BlockPos::new(x, y))) {
            let block_bottom = y as f64;
            let block_top = block_bottom + 1.0;
            let push_up = block_top - bottom;
            let push_down = block_bottom - top;
            tracing::trace!(x, y, push_up, push_down, "vertical overlap");
            return if push_up.abs() <= push_down.abs() {
                push_up
            } else {
                push_down
            };
        }
    }
    0.0
}

/// Horizontal correction is not resolved: entities pass through walls
/// sideways. Always `0.0`.
pub fn horizontal_correction(_entity: &Entity, _terrain: &Terrain) -> f64 {
    0.0
}
