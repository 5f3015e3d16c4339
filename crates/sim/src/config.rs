//! Driver configuration, loaded from JSON.
//!
//! Every section is optional; missing fields fall back to the defaults
//! below, so `{}` is a valid config file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tilecraft_engine::physics::PhysicsConfig;
use tilecraft_engine::world::WorldConfig;
use tilecraft_engine::world::generation::FlatTerrain;

use crate::input::InputSegment;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ticks_per_second: u32,
    /// Stop after this many ticks. `None` runs until Ctrl+C.
    pub max_ticks: Option<u64>,
    pub spawn: Spawn,
    pub view: ViewSize,
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub terrain: FlatTerrain,
    /// Player input timeline, played once from tick 0.
    pub script: Vec<InputSegment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spawn {
    pub x: f64,
    pub y: f64,
}

/// Size in blocks of the region drawn around the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            max_ticks: Some(600),
            spawn: Spawn { x: 0.5, y: 4.0 },
            view: ViewSize {
                width: 48.0,
                height: 16.0,
            },
            world: WorldConfig::default(),
            physics: PhysicsConfig::default(),
            terrain: FlatTerrain::default(),
            script: vec![
                InputSegment::idle(60),
                InputSegment {
                    ticks: 90,
                    right: true,
                    ..InputSegment::default()
                },
                InputSegment {
                    ticks: 1,
                    right: true,
                    jump: true,
                    ..InputSegment::default()
                },
                InputSegment {
                    ticks: 120,
                    left: true,
                    ..InputSegment::default()
                },
            ],
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        anyhow::ensure!(config.ticks_per_second > 0, "ticks_per_second must be positive");
        Ok(config)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.ticks_per_second)
    }
}
