//! Simulation objects that move through the world.

pub mod intent;
pub mod inventory;

use std::fmt;

use uuid::Uuid;

use intent::Intent;
use inventory::Inventory;

/// Globally unique entity identifier (a random UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier's 16 bytes as two big-endian halves.
    pub fn as_u64_pair(&self) -> (u64, u64) {
        self.0.as_u64_pair()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Collision box anchored at an entity's position: `half_width` to either
/// side of x, and `height` upward from y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub half_width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Player-only state.
#[derive(Debug, Clone, Default)]
pub struct PlayerData {
    pub inventory: Inventory,
}

/// Entity type tag together with its type-specific payload.
#[derive(Debug, Clone)]
pub enum EntityKind {
    Player(PlayerData),
}

impl EntityKind {
    fn name(&self) -> &'static str {
        match self {
            EntityKind::Player(_) => "player",
        }
    }

    fn hitbox(&self) -> Hitbox {
        match self {
            EntityKind::Player(_) => Hitbox {
                half_width: 0.4,
                height: 1.8,
            },
        }
    }

    fn max_health(&self) -> f64 {
        match self {
            EntityKind::Player(_) => 20.0,
        }
    }
}

/// A moving object in the world.
///
/// Position is public so gameplay can place entities and renderers can read
/// them. Velocity and the smoothing filter state are only advanced by
/// [`physics::step`](crate::physics::step); input reaches them through
/// [`Entity::apply_intent`].
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    pub x: f64,
    pub y: f64,
    hitbox: Hitbox,
    pub health: f64,
    pub(crate) velocity_x: f64,
    pub(crate) velocity_y: f64,
    /// Internal state of the horizontal smoothing filter.
    pub(crate) acceleration_x: f64,
    pub(crate) desired_velocity_x: f64,
    pub(crate) jump_requested: bool,
    pub(crate) on_ground: bool,
    pub(crate) facing: Facing,
    kind: EntityKind,
}

impl Entity {
    /// Build an entity with the defaults its kind dictates (hitbox, health)
    /// and a fresh unique id.
    pub fn new(kind: EntityKind, x: f64, y: f64) -> Self {
        Self {
            id: EntityId::new(),
            x,
            y,
            hitbox: kind.hitbox(),
            health: kind.max_health(),
            velocity_x: 0.0,
            velocity_y: 0.0,
            acceleration_x: 0.0,
            desired_velocity_x: 0.0,
            jump_requested: false,
            on_ground: false,
            facing: Facing::default(),
            kind,
        }
    }

    pub fn player(x: f64, y: f64) -> Self {
        Self::new(EntityKind::Player(PlayerData::default()), x, y)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.velocity_x, self.velocity_y)
    }

    pub fn desired_velocity_x(&self) -> f64 {
        self.desired_velocity_x
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        match &self.kind {
            EntityKind::Player(player) => Some(&player.inventory),
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match &mut self.kind {
            EntityKind::Player(player) => Some(&mut player.inventory),
        }
    }

    /// Take this tick's input intent. Only the desired horizontal velocity
    /// and the jump trigger change; physics state is left alone.
    pub fn apply_intent(&mut self, intent: &Intent) {
        self.desired_velocity_x = intent.desired_velocity_x;
        if intent.jump {
            self.jump_requested = true;
        }
    }

    /// World-space bounds `(left, bottom, right, top)` of the hitbox.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.x - self.hitbox.half_width,
            self.y,
            self.x + self.hitbox.half_width,
            self.y + self.hitbox.height,
        )
    }
}
