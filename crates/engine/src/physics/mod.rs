//! Per-tick entity motion: smoothed horizontal velocity, gravity, and
//! positional collision response against the block grid.

pub mod collision;
pub mod smooth;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Facing};
use crate::world::terrain::Terrain;
use smooth::smooth_damp;

/// Tuning for entity motion. Units are blocks and seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (blocks/s²).
    pub gravity: f64,
    /// Largest downward speed (blocks/s).
    pub terminal_velocity: f64,
    /// Horizontal speed requested by held movement keys.
    pub walk_speed: f64,
    /// Upward speed set by a jump.
    pub jump_velocity: f64,
    /// Time the horizontal filter takes to settle.
    pub smooth_time: f64,
    /// Cap on the horizontal filter's rate of change.
    pub max_speed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 40.0,
            terminal_velocity: 20.0,
            walk_speed: 6.0,
            jump_velocity: 12.0,
            smooth_time: 0.1,
            max_speed: 50.0,
        }
    }
}

/// Advance one entity by `dt` seconds.
///
/// 1. Horizontal velocity is smoothed toward the desired velocity.
/// 2. A pending jump fires if the entity is grounded; gravity then pulls
///    vertical velocity down to at most terminal velocity.
/// 3. Position integrates both velocities.
/// 4. The vertical collision correction is added straight to `y`.
pub fn step(entity: &mut Entity, terrain: &Terrain, dt: f64, config: &PhysicsConfig) {
    entity.velocity_x = smooth_damp(
        entity.velocity_x,
        entity.desired_velocity_x,
        &mut entity.acceleration_x,
        config.smooth_time,
        config.max_speed,
        dt,
    );
    if entity.desired_velocity_x < 0.0 {
        entity.facing = Facing::Left;
    } else if entity.desired_velocity_x > 0.0 {
        entity.facing = Facing::Right;
    }

    if std::mem::take(&mut entity.jump_requested) && entity.on_ground {
        entity.velocity_y = config.jump_velocity;
    }
    entity.velocity_y = (entity.velocity_y - config.gravity * dt).max(-config.terminal_velocity);

    entity.x += entity.velocity_x * dt;
    entity.y += entity.velocity_y * dt;

    entity.x += collision::horizontal_correction(entity, terrain);

    let dy = collision::vertical_correction(entity, terrain);
    entity.y += dy;
    entity.on_ground = dy > 0.0 && entity.velocity_y <= 0.0;
    if (dy > 0.0 && entity.velocity_y < 0.0) || (dy < 0.0 && entity.velocity_y > 0.0) {
        entity.velocity_y = 0.0;
    }

    tracing::trace!(
        id = %entity.id(),
        x = entity.x,
        y = entity.y,
        vx = entity.velocity_x,
        vy = entity.velocity_y,
        "stepped entity"
    );
}
