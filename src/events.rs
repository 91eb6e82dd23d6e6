use bevy::prelude::*;

// Fired when the head lands on the apple's cell; the snake has already grown
// and the apple has already moved by the time readers see it.
#[derive(Event)]
pub struct AppleEatenEvent;

// Fired when the head runs into the body. Carries the final score so the
// overlay and logs don't have to re-derive it.
#[derive(Event)]
pub struct GameOverEvent {
    pub final_score: u32,
}

// Fired by the Enter key while in the game-over phase.
#[derive(Event)]
pub struct RestartEvent;
