// resources.rs
use bevy::prelude::*;

use crate::components::Direction;

/// Which half of the state machine the loop is in. Game over is an explicit
/// phase, not an error path; systems gate on it each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

#[derive(Resource)]
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Running,
            score: 1, // score is snake length, which starts at 1
        }
    }
}

/// Fixed simulation cadence; rendering still runs every frame.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(0.3, TimerMode::Repeating))
    }
}

/// At most one buffered direction command, consumed once per tick. Keyboard
/// input writes it; the tick system takes it. Extra presses between ticks
/// simply replace the buffer.
#[derive(Resource, Default)]
pub struct PendingDirection(pub Option<Direction>);

/// Handles for everything loaded out of assets/.
#[derive(Resource)]
pub struct GameAssets {
    pub apple: Handle<Image>,
    pub block: Handle<Image>,
    pub background: Handle<Image>,
    pub music: Handle<AudioSource>,
    pub ding: Handle<AudioSource>,
    pub crash: Handle<AudioSource>,
}
