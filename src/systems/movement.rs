use crate::components::{GridSettings, Snake};
use crate::resources::{GameState, PendingDirection, Phase, TickTimer};
use bevy::prelude::*;

/// Advances the simulation on the fixed tick cadence. At most one buffered
/// direction command is consumed per tick, then every segment shifts and the
/// head moves one cell. Collision checks run right after this system in the
/// same frame.
pub fn snake_tick_system(
    time: Res<Time>,
    grid_settings: Res<GridSettings>,
    mut timer: ResMut<TickTimer>,
    mut game_state: ResMut<GameState>,
    mut pending: ResMut<PendingDirection>,
    mut query: Query<&mut Snake>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() || game_state.phase != Phase::Running {
        return;
    }

    if let Ok(mut snake) = query.get_single_mut() {
        if let Some(direction) = pending.0.take() {
            snake.turn(direction);
        }
        snake.advance(&grid_settings);
        game_state.score = snake.score();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Direction, Position};
    use std::time::Duration;

    fn test_app(elapsed: Duration) -> App {
        let mut app = App::new();
        let mut time = Time::<()>::default();
        time.advance_by(elapsed);
        app.insert_resource(time);
        app.insert_resource(GridSettings::default());
        app.insert_resource(GameState::default());
        app.insert_resource(TickTimer::default());
        app.insert_resource(PendingDirection::default());
        app.add_systems(Update, snake_tick_system);
        app
    }

    #[test]
    fn test_tick_advances_snake() {
        let mut app = test_app(Duration::from_millis(310));
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();

        app.update();

        let snake = app.world().get::<Snake>(snake).unwrap();
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_no_advance_before_interval_elapses() {
        let mut app = test_app(Duration::from_millis(100));
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();

        app.update();

        let snake = app.world().get::<Snake>(snake).unwrap();
        assert_eq!(snake.head(), Position::new(5, 5));
    }

    #[test]
    fn test_pending_direction_consumed_once() {
        let mut app = test_app(Duration::from_millis(310));
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();
        app.world_mut().resource_mut::<PendingDirection>().0 = Some(Direction::Up);

        app.update();

        assert_eq!(
            app.world().get::<Snake>(snake).unwrap().head(),
            Position::new(5, 6)
        );
        assert!(app.world().resource::<PendingDirection>().0.is_none());

        // The next tick keeps the turned direction without a fresh command.
        app.update();
        assert_eq!(
            app.world().get::<Snake>(snake).unwrap().head(),
            Position::new(5, 7)
        );
    }

    #[test]
    fn test_no_advance_while_game_over() {
        let mut app = test_app(Duration::from_millis(310));
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();
        app.world_mut().resource_mut::<GameState>().phase = Phase::GameOver;

        app.update();

        let snake = app.world().get::<Snake>(snake).unwrap();
        assert_eq!(snake.head(), Position::new(5, 5));
    }
}
