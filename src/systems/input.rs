use crate::components::Direction;
use crate::events::RestartEvent;
use crate::resources::{GameState, PendingDirection, Phase};
use bevy::app::AppExit;
use bevy::prelude::*;

pub fn keyboard_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut pending: ResMut<PendingDirection>,
    mut restart_events: EventWriter<RestartEvent>,
    mut exit_events: EventWriter<AppExit>,
) {
    // Escape quits from any phase; window close is handled by the engine.
    if keyboard_input.just_pressed(KeyCode::Escape) {
        exit_events.send(AppExit::Success);
        return;
    }

    match game_state.phase {
        Phase::Running => {
            // Arrows buffer one direction command for the next tick. A later
            // press in the same frame wins, same as repeated presses between
            // ticks.
            if keyboard_input.just_pressed(KeyCode::ArrowUp) {
                pending.0 = Some(Direction::Up);
            }
            if keyboard_input.just_pressed(KeyCode::ArrowDown) {
                pending.0 = Some(Direction::Down);
            }
            if keyboard_input.just_pressed(KeyCode::ArrowLeft) {
                pending.0 = Some(Direction::Left);
            }
            if keyboard_input.just_pressed(KeyCode::ArrowRight) {
                pending.0 = Some(Direction::Right);
            }
        }
        Phase::GameOver => {
            // Arrows are ignored while paused; only restart and quit work.
            if keyboard_input.just_pressed(KeyCode::Enter) {
                restart_events.send(RestartEvent);
            }
        }
    }
}
