//! Scripted stand-in for a keyboard: a timeline of held-key segments.

use serde::{Deserialize, Serialize};
use tilecraft_engine::entity::intent::InputState;

/// Keys held for `ticks` consecutive ticks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSegment {
    pub ticks: u64,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSegment {
    pub fn idle(ticks: u64) -> Self {
        Self {
            ticks,
            ..Self::default()
        }
    }

    fn state(&self) -> InputState {
        InputState {
            left: self.left,
            right: self.right,
            jump: self.jump,
        }
    }
}

/// Plays a list of segments back by tick number. Past the end, nothing is
/// held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<InputSegment>,
}

impl ScriptedInput {
    pub fn new(segments: Vec<InputSegment>) -> Self {
        Self { segments }
    }

    /// Total ticks covered by the script.
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| s.ticks).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn state_at(&self, tick: u64) -> InputState {
        let mut start = 0;
        for segment in &self.segments {
            if tick < start + segment.ticks {
                return segment.state();
            }
            start += segment.ticks;
        }
        InputState::default()
    }
}
