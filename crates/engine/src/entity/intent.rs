//! Per-tick translation of raw input into entity intent.

use crate::physics::PhysicsConfig;

/// Held keys, sampled once per tick by whatever owns the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// What an entity wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    pub desired_velocity_x: f64,
    pub jump: bool,
}

/// Opposing directions cancel out.
pub fn intent(input: &InputState, config: &PhysicsConfig) -> Intent {
    let direction = match (input.left, input.right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    Intent {
        desired_velocity_x: direction * config.walk_speed,
        jump: input.jump,
    }
}
