use crate::components::{Apple, GridSettings, Snake};
use crate::events::{AppleEatenEvent, GameOverEvent};
use crate::resources::{GameState, Phase};
use bevy::prelude::*;

/// Runs right after the tick system. Collision on a grid is exact cell
/// equality; the cell size itself is the tolerance window.
pub fn collision_detection_system(
    grid_settings: Res<GridSettings>,
    mut game_state: ResMut<GameState>,
    mut snake_query: Query<&mut Snake>,
    mut apple_query: Query<&mut Apple>,
    mut eaten_events: EventWriter<AppleEatenEvent>,
    mut game_over_events: EventWriter<GameOverEvent>,
) {
    if game_state.phase != Phase::Running {
        return;
    }

    let Ok(mut snake) = snake_query.get_single_mut() else {
        return;
    };
    let Ok(mut apple) = apple_query.get_single_mut() else {
        return;
    };

    // Head on the apple: grow, move the apple, let the audio system ding.
    // Relocating immediately keeps this check from re-firing on the frames
    // between ticks.
    if snake.head() == apple.position {
        snake.grow();
        apple.relocate(&grid_settings);
        game_state.score = snake.score();
        info!("apple eaten, score {}", game_state.score);
        eaten_events.send(AppleEatenEvent);
    }

    // Head on the body: segments 0..3 are excluded inside hits_self so the
    // placeholder stack after a growth can't crash the run.
    if snake.hits_self() {
        game_over_events.send(GameOverEvent {
            final_score: snake.score(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Direction, Position};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<AppleEatenEvent>();
        app.add_event::<GameOverEvent>();
        app.insert_resource(GridSettings::default());
        app.insert_resource(GameState::default());
        app.add_systems(Update, collision_detection_system);
        app
    }

    #[test]
    fn test_eating_grows_snake_and_moves_apple() {
        let mut app = test_app();
        let grid = GridSettings::default();
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();
        let apple = app
            .world_mut()
            .spawn(Apple::spawn(Position::new(5, 5)))
            .id();

        app.update();

        let snake_ref = app.world().get::<Snake>(snake).unwrap();
        assert_eq!(snake_ref.len(), 2);
        assert!(grid.contains(app.world().get::<Apple>(apple).unwrap().position));
        assert_eq!(app.world().resource::<GameState>().score, 2);
        assert!(!app
            .world()
            .resource::<Events<AppleEatenEvent>>()
            .is_empty());
        assert!(app.world().resource::<Events<GameOverEvent>>().is_empty());
    }

    #[test]
    fn test_plain_tick_changes_nothing() {
        let mut app = test_app();
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();
        app.world_mut().spawn(Apple::spawn(Position::new(9, 9)));

        app.update();

        assert_eq!(app.world().get::<Snake>(snake).unwrap().len(), 1);
        assert!(app.world().resource::<Events<AppleEatenEvent>>().is_empty());
        assert!(app.world().resource::<Events<GameOverEvent>>().is_empty());
    }

    #[test]
    fn test_self_collision_reports_game_over() {
        let mut app = test_app();
        // Head doubled back onto a segment past the exclusion window.
        app.world_mut().spawn(Snake {
            segments: vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 6),
                Position::new(5, 5),
            ],
            direction: Direction::Down,
        });
        app.world_mut().spawn(Apple::spawn(Position::new(9, 9)));

        app.update();

        let events = app.world().resource::<Events<GameOverEvent>>();
        let mut cursor = events.get_cursor();
        let event = cursor.read(events).next().unwrap();
        assert_eq!(event.final_score, 5);
    }

    #[test]
    fn test_no_checks_while_game_over() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameState>().phase = Phase::GameOver;
        let snake = app
            .world_mut()
            .spawn(Snake::spawn(Position::new(5, 5), Direction::Right))
            .id();
        app.world_mut().spawn(Apple::spawn(Position::new(5, 5)));

        app.update();

        assert_eq!(app.world().get::<Snake>(snake).unwrap().len(), 1);
        assert!(app.world().resource::<Events<AppleEatenEvent>>().is_empty());
    }
}
