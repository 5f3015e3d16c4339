use serde::{Deserialize, Serialize};

/// Terrain cell type.
///
/// `Air` is the universal "empty" block: unwritten cells and missing chunks
/// read as air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Dirt,
    Grass,
    #[default]
    Air,
    Log,
    /// Unbreakable rock at the bottom of the world.
    Bedrock,
}

/// Static attributes of a block type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProperties {
    /// Seconds needed to break the block. `f64::INFINITY` means unbreakable.
    pub break_time: f64,
    /// Whether entities collide with the block.
    pub collides: bool,
}

/// Indexed by `Block as usize`.
static PROPERTIES: [BlockProperties; Block::COUNT] = [
    // Dirt
    BlockProperties { break_time: 0.5, collides: true },
    // Grass
    BlockProperties { break_time: 0.6, collides: true },
    // Air
    BlockProperties { break_time: f64::INFINITY, collides: false },
    // Log
    BlockProperties { break_time: 2.0, collides: true },
    // Bedrock
    BlockProperties { break_time: f64::INFINITY, collides: true },
];

impl Block {
    pub const COUNT: usize = 5;

    pub const ALL: [Block; Block::COUNT] = [
        Block::Dirt,
        Block::Grass,
        Block::Air,
        Block::Log,
        Block::Bedrock,
    ];

    #[inline]
    pub fn properties(self) -> &'static BlockProperties {
        &PROPERTIES[self as usize]
    }

    #[inline]
    pub fn collides(self) -> bool {
        self.properties().collides
    }

    pub fn is_breakable(self) -> bool {
        self.properties().break_time.is_finite()
    }

    /// One-character glyph for text views.
    pub fn glyph(self) -> char {
        match self {
            Block::Dirt => '#',
            Block::Grass => '"',
            Block::Air => ' ',
            Block::Log => '|',
            Block::Bedrock => '=',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lines_up_with_variants() {
        for (i, block) in Block::ALL.iter().enumerate() {
            assert_eq!(*block as usize, i);
        }
        assert!(!Block::Air.collides());
        assert!(Block::Dirt.collides());
        assert!(!Block::Bedrock.is_breakable());
        assert!(Block::Log.is_breakable());
    }
}
