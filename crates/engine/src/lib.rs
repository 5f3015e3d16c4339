//! Sparse 2D tile world: a hand-built chained hash store, chunked terrain
//! that materializes on first write, and entity motion with block collision.
//!
//! Everything here is single-threaded and synchronous. A [`world::World`]
//! owns its chunks and entities outright.

pub mod entity;
pub mod physics;
pub mod store;
pub mod world;
