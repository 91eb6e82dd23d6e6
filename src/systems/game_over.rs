use crate::components::{Apple, GridSettings, Snake, INITIAL_DIRECTION};
use crate::events::{GameOverEvent, RestartEvent};
use crate::resources::{GameState, PendingDirection, Phase};
use bevy::prelude::*;

/// Latches the game-over phase. Audio and the overlay react to the same
/// event in their own systems.
pub fn handle_game_over(
    mut game_over_events: EventReader<GameOverEvent>,
    mut game_state: ResMut<GameState>,
) {
    for event in game_over_events.read() {
        if game_state.phase == Phase::Running {
            game_state.phase = Phase::GameOver;
            game_state.score = event.final_score;
            info!("game over, final score {}", event.final_score);
        }
    }
}

/// Rebuilds the run from scratch: snake back to a single segment at its
/// spawn cell, apple back to its spawn cell, buffered input dropped.
pub fn handle_restart(
    mut restart_events: EventReader<RestartEvent>,
    grid_settings: Res<GridSettings>,
    mut game_state: ResMut<GameState>,
    mut pending: ResMut<PendingDirection>,
    mut snake_query: Query<&mut Snake>,
    mut apple_query: Query<&mut Apple>,
) {
    if restart_events.read().next().is_none() {
        return;
    }
    if game_state.phase != Phase::GameOver {
        return;
    }

    if let Ok(mut snake) = snake_query.get_single_mut() {
        *snake = Snake::spawn(grid_settings.snake_spawn(), INITIAL_DIRECTION);
    }
    if let Ok(mut apple) = apple_query.get_single_mut() {
        *apple = Apple::spawn(grid_settings.apple_spawn());
    }
    pending.0 = None;
    game_state.phase = Phase::Running;
    game_state.score = 1;
    info!("restarting run");
}
