//! The simulation context: one world, one player, one input source.
//!
//! Replaces process-wide world/player globals. Whoever drives the frame
//! loop owns a [`Simulation`] and calls [`Simulation::tick`] once per frame.

use anyhow::Context;
use tilecraft_engine::entity::intent::intent;
use tilecraft_engine::entity::{Entity, EntityId};
use tilecraft_engine::physics::PhysicsConfig;
use tilecraft_engine::world::World;
use tilecraft_engine::world::generation::generate_flat;
use tilecraft_engine::world::view::View;

use crate::config::{SimConfig, ViewSize};
use crate::input::ScriptedInput;

pub struct Simulation {
    world: World,
    player: EntityId,
    physics: PhysicsConfig,
    input: ScriptedInput,
    view: ViewSize,
    ticks: u64,
}

impl Simulation {
    /// Build the world, generate terrain, and spawn the player.
    pub fn new(config: &SimConfig) -> anyhow::Result<Self> {
        let mut world = World::with_config(&config.world).context("allocating world")?;
        generate_flat(&mut world, &config.terrain).context("generating terrain")?;
        let player = world
            .spawn(Entity::player(config.spawn.x, config.spawn.y))
            .context("spawning player")?;

        tracing::info!(
            "World ready: {} chunks, player {} at ({}, {})",
            world.chunk_count(),
            player,
            config.spawn.x,
            config.spawn.y
        );

        Ok(Self {
            world,
            player,
            physics: config.physics.clone(),
            input: ScriptedInput::new(config.script.clone()),
            view: config.view,
            ticks: 0,
        })
    }

    /// Sample input, hand the player its intent, and step every entity.
    pub fn tick(&mut self, dt: f64) {
        let state = self.input.state_at(self.ticks);
        let player_intent = intent(&state, &self.physics);
        if let Some(player) = self.world.entity_mut(self.player) {
            player.apply_intent(&player_intent);
        }
        self.world.step_entities(dt, &self.physics);
        self.ticks += 1;
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.world.entity(self.player)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The configured view, centred on the player (or the origin if the
    /// player is gone).
    pub fn view(&self) -> View {
        let (x, y) = self.player().map_or((0.0, 0.0), |p| (p.x, p.y));
        View::new(x, y, self.view.width, self.view.height)
    }

    /// Tear the world down, releasing every chunk and entity.
    pub fn shutdown(mut self) {
        let (chunks, entities) = self.world.clear();
        tracing::info!("Released {} chunks and {} entities", chunks, entities);
    }
}
