//! Text renderer. Reads the world through the visibility queries only and
//! never mutates it.

use tilecraft_engine::world::World;
use tilecraft_engine::world::block::Block;
use tilecraft_engine::world::position::BlockPos;
use tilecraft_engine::world::view::View;

const ENTITY_GLYPH: char = '@';

/// Draw the view as rows of glyphs, top row first. Cells covered by an
/// entity's hitbox show `@`.
pub fn ascii(world: &World, view: &View) -> String {
    let chunks = world.visible_chunks(view);
    let entities = world.visible_entities(view);

    let x0 = view.left().floor() as i64;
    let x1 = view.right().ceil() as i64 - 1;
    let y0 = view.bottom().floor() as i64;
    let y1 = view.top().ceil() as i64 - 1;

    let mut out = String::new();
    for y in (y0..=y1).rev() {
        for x in x0..=x1 {
            let covered = entities.iter().any(|e| {
                let (left, bottom, right, top) = e.bounds();
                (x as f64) < right && (x + 1) as f64 > left && (y as f64) < top && (y + 1) as f64 > bottom
            });
            if covered {
                out.push(ENTITY_GLYPH);
                continue;
            }

            let pos = BlockPos::new(x, y);
            let block = chunks
                .iter()
                .find(|chunk| chunk.pos() == pos.chunk())
                .map_or(Block::Air, |chunk| chunk.get(pos.local()));
            out.push(block.glyph());
        }
        out.push('\n');
    }
    out
}
