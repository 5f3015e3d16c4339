//! Chunk addressing, lazy materialization, region fills, entity ownership
//! and the read-only view queries.

use tilecraft_engine::entity::{Entity, EntityKind};
use tilecraft_engine::world::block::Block;
use tilecraft_engine::world::chunk::Chunk;
use tilecraft_engine::world::generation::{FlatTerrain, generate_flat};
use tilecraft_engine::world::position::{BlockPos, ChunkPos, LocalBlockPos};
use tilecraft_engine::world::view::View;
use tilecraft_engine::world::{World, WorldConfig, WorldError, WorldKey};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn world() -> World {
    World::new().unwrap()
}

fn small_world() -> World {
    World::with_config(&WorldConfig {
        chunk_buckets: 4,
        entity_buckets: 2,
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Chunks
// ---------------------------------------------------------------------------

#[test]
fn set_block_creates_chunk_silently() {
    let mut w = world();
    assert!(w.get_chunk(ChunkPos::new(0, 0)).is_none());

    w.set_block(BlockPos::new(0, 0), Block::Dirt).unwrap();

    let chunk = w.get_chunk(ChunkPos::new(0, 0)).expect("chunk should exist");
    assert_eq!(chunk.get(LocalBlockPos::new(0, 0).unwrap()), Block::Dirt);
    assert_eq!(chunk.get(LocalBlockPos::new(1, 0).unwrap()), Block::Air);
    assert_eq!(w.chunk_count(), 1);
}

#[test]
fn get_block_never_allocates() {
    let w = world();
    assert_eq!(w.get_block(BlockPos::new(1000, -1000)), Block::Air);
    assert_eq!(w.chunk_count(), 0);
}

#[test]
fn origin_boundary_uses_floor_division() {
    let mut w = world();
    w.set_block(BlockPos::new(-1, 0), Block::Log).unwrap();
    w.set_block(BlockPos::new(0, 0), Block::Grass).unwrap();

    let left = w.get_chunk(ChunkPos::new(-1, 0)).expect("chunk -1");
    let right = w.get_chunk(ChunkPos::new(0, 0)).expect("chunk 0");
    assert_eq!(left.get(LocalBlockPos::new(15, 0).unwrap()), Block::Log);
    assert_eq!(right.get(LocalBlockPos::new(0, 0).unwrap()), Block::Grass);
    assert_eq!(w.chunk_count(), 2);
}

#[test]
fn writes_into_existing_chunk_reuse_it() {
    let mut w = small_world();
    for x in 0..16 {
        for y in 0..16 {
            w.set_block(BlockPos::new(x, y), Block::Dirt).unwrap();
        }
    }
    assert_eq!(w.chunk_count(), 1);
}

#[test]
fn duplicate_chunk_insert_is_rejected() {
    let mut w = world();
    w.put_chunk(Chunk::new_filled(ChunkPos::new(2, -3), Block::Log)).unwrap();

    let err = w
        .put_chunk(Chunk::new_filled(ChunkPos::new(2, -3), Block::Dirt))
        .unwrap_err();
    assert!(matches!(err, WorldError::DuplicateChunk(pos) if pos == ChunkPos::new(2, -3)));

    // The existing chunk is untouched.
    assert_eq!(w.get_block(BlockPos::new(32, -48)), Block::Log);
    assert_eq!(w.chunk_count(), 1);
}

#[test]
fn chunk_cells_are_only_reachable_in_range() {
    let mut chunk = Chunk::new(ChunkPos::new(0, 0));
    let corner = LocalBlockPos::new(15, 15).unwrap();
    chunk.set(corner, Block::Log);
    assert_eq!(chunk.get(corner), Block::Log);
    assert_eq!(chunk.get(LocalBlockPos::new(0, 0).unwrap()), Block::Air);

    // 16 would wrap into the next row, or past the end of the array.
    assert!(LocalBlockPos::new(16, 0).is_none());
    assert!(LocalBlockPos::new(0, 16).is_none());
}

#[test]
fn many_chunks_share_few_buckets() {
    let mut w = small_world();
    for cx in -5..5 {
        for cy in -5..5 {
            w.put_chunk(Chunk::new_filled(ChunkPos::new(cx, cy), Block::Dirt))
                .unwrap();
        }
    }
    assert_eq!(w.chunk_count(), 100);
    for cx in -5..5 {
        for cy in -5..5 {
            assert_eq!(w.get_chunk(ChunkPos::new(cx, cy)).unwrap().pos(), ChunkPos::new(cx, cy));
        }
    }
}

#[test]
fn chunk_keys_hash_by_coordinate_pairing() {
    assert_eq!(WorldKey::Chunk(ChunkPos::new(3, 2)).hash(), 14);
    assert_eq!(WorldKey::Chunk(ChunkPos::new(2, 3)).hash(), 11);
}

// ---------------------------------------------------------------------------
// Fill
// ---------------------------------------------------------------------------

#[test]
fn fill_covers_square_and_nothing_else() {
    let mut w = world();
    w.fill_block(BlockPos::new(-128, -128), BlockPos::new(128, 128), Block::Dirt)
        .unwrap();

    for y in -128..=128 {
        for x in -128..=128 {
            assert_eq!(w.get_block(BlockPos::new(x, y)), Block::Dirt, "({x}, {y})");
        }
    }
    assert_eq!(w.get_block(BlockPos::new(129, 0)), Block::Air);
    assert_eq!(w.get_block(BlockPos::new(0, -129)), Block::Air);
}

#[test]
fn fill_accepts_corners_in_any_order() {
    let mut w = world();
    w.fill_block(BlockPos::new(3, 3), BlockPos::new(-2, -1), Block::Log)
        .unwrap();
    assert_eq!(w.get_block(BlockPos::new(-2, -1)), Block::Log);
    assert_eq!(w.get_block(BlockPos::new(3, 3)), Block::Log);
    assert_eq!(w.get_block(BlockPos::new(0, 1)), Block::Log);
    assert_eq!(w.get_block(BlockPos::new(4, 3)), Block::Air);
}

#[test]
fn flat_generation_layers() {
    let mut w = world();
    let terrain = FlatTerrain {
        min_x: -20,
        max_x: 20,
        surface_y: 5,
        depth: 3,
    };
    generate_flat(&mut w, &terrain).unwrap();

    assert_eq!(w.get_block(BlockPos::new(0, 6)), Block::Air);
    assert_eq!(w.get_block(BlockPos::new(0, 5)), Block::Grass);
    for y in 2..=4 {
        assert_eq!(w.get_block(BlockPos::new(-20, y)), Block::Dirt);
    }
    assert_eq!(w.get_block(BlockPos::new(20, 1)), Block::Bedrock);
    assert_eq!(w.get_block(BlockPos::new(0, 0)), Block::Air);
    assert_eq!(w.get_block(BlockPos::new(21, 5)), Block::Air);
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[test]
fn spawn_lookup_and_remove() {
    let mut w = small_world();
    let ids: Vec<_> = (0..10)
        .map(|i| w.spawn(Entity::player(f64::from(i), 0.0)).unwrap())
        .collect();
    assert_eq!(w.entity_count(), 10);

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(w.entity(*id).unwrap().x, i as f64);
    }

    let taken = w.remove_entity(ids[3]).unwrap();
    assert_eq!(taken.id(), ids[3]);
    assert!(w.entity(ids[3]).is_none());
    assert!(w.remove_entity(ids[3]).is_none());
    assert_eq!(w.entity_count(), 9);
}

#[test]
fn player_factory_fixes_kind_defaults() {
    let mut w = world();
    let id = w.spawn(Entity::player(2.0, 3.0)).unwrap();

    let player = w.entity_mut(id).unwrap();
    assert!(matches!(player.kind(), EntityKind::Player(_)));
    assert_eq!(player.hitbox().height, 1.8);
    assert_eq!(player.health, 20.0);

    let inventory = player.inventory_mut().expect("players carry an inventory");
    assert_eq!(inventory.add(Block::Dirt, 10), 0);
    assert_eq!(w.entity(id).unwrap().inventory().unwrap().count(Block::Dirt), 10);
}

#[test]
fn fresh_entities_get_distinct_ids() {
    let a = Entity::player(0.0, 0.0);
    let b = Entity::player(0.0, 0.0);
    assert_ne!(a.id(), b.id());
    assert_ne!(WorldKey::Entity(a.id()), WorldKey::Entity(b.id()));
}

#[test]
fn spawning_same_entity_twice_fails() {
    let mut w = world();
    let player = Entity::player(0.0, 0.0);
    let copy = player.clone();
    let id = w.spawn(player).unwrap();
    assert!(matches!(w.spawn(copy), Err(WorldError::DuplicateEntity(dup)) if dup == id));
}

#[test]
fn clear_releases_everything() {
    let mut w = small_world();
    w.fill_block(BlockPos::new(-40, -40), BlockPos::new(40, 40), Block::Dirt)
        .unwrap();
    for _ in 0..5 {
        w.spawn(Entity::player(0.0, 50.0)).unwrap();
    }
    let chunks = w.chunk_count();

    assert_eq!(w.clear(), (chunks, 5));
    assert_eq!(w.chunk_count(), 0);
    assert_eq!(w.entity_count(), 0);
    assert_eq!(w.get_block(BlockPos::new(0, 0)), Block::Air);
}

// ---------------------------------------------------------------------------
// View queries
// ---------------------------------------------------------------------------

#[test]
fn visible_chunks_only_lists_existing_chunks_in_range() {
    let mut w = world();
    w.set_block(BlockPos::new(0, 0), Block::Dirt).unwrap();
    w.set_block(BlockPos::new(-1, -1), Block::Dirt).unwrap();
    w.set_block(BlockPos::new(100, 0), Block::Dirt).unwrap();

    let view = View::new(0.0, 0.0, 20.0, 10.0);
    let mut visible: Vec<ChunkPos> = w.visible_chunks(&view).iter().map(|c| c.pos()).collect();
    visible.sort_by_key(|p| (p.x, p.y));
    assert_eq!(visible, vec![ChunkPos::new(-1, -1), ChunkPos::new(0, 0)]);
    // Querying did not create the empty neighbours.
    assert_eq!(w.chunk_count(), 3);
}

#[test]
fn visible_entities_filters_by_position() {
    let mut w = world();
    let near = w.spawn(Entity::player(1.0, 1.0)).unwrap();
    w.spawn(Entity::player(50.0, 1.0)).unwrap();

    let view = View::new(0.0, 0.0, 10.0, 10.0);
    let visible = w.visible_entities(&view);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id(), near);
}
