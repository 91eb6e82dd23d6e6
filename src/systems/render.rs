use crate::components::{
    Apple, AppleSprite, GameOverText, GridSettings, ScoreText, SegmentSprite, Snake,
};
use crate::resources::{GameAssets, GameState, Phase};
use bevy::prelude::*;

// Sprites sit above the background image.
const SPRITE_Z: f32 = 1.0;

/// Keeps one block sprite per snake segment: retargets existing sprites,
/// spawns sprites for segments added by growth, despawns leftovers after a
/// reset shrinks the snake.
pub fn sync_snake_sprites(
    mut commands: Commands,
    grid_settings: Res<GridSettings>,
    assets: Res<GameAssets>,
    snake_query: Query<&Snake>,
    mut sprite_query: Query<(Entity, &SegmentSprite, &mut Transform)>,
) {
    let Ok(snake) = snake_query.get_single() else {
        return;
    };

    let mut covered = vec![false; snake.len()];
    for (entity, segment, mut transform) in sprite_query.iter_mut() {
        if segment.index < snake.len() {
            covered[segment.index] = true;
            let world = grid_settings.cell_to_world(snake.segments[segment.index]);
            transform.translation = world.extend(SPRITE_Z);
        } else {
            commands.entity(entity).despawn();
        }
    }

    for (index, already_spawned) in covered.into_iter().enumerate() {
        if !already_spawned {
            // A fresh segment starts at the off-grid sentinel, so its sprite
            // spawns outside the camera view until the next advance.
            let world = grid_settings.cell_to_world(snake.segments[index]);
            commands.spawn((
                Sprite {
                    image: assets.block.clone(),
                    custom_size: Some(Vec2::splat(grid_settings.cell_size)),
                    ..default()
                },
                Transform::from_translation(world.extend(SPRITE_Z)),
                SegmentSprite { index },
            ));
        }
    }
}

pub fn sync_apple_sprite(
    grid_settings: Res<GridSettings>,
    apple_query: Query<&Apple>,
    mut sprite_query: Query<&mut Transform, With<AppleSprite>>,
) {
    let Ok(apple) = apple_query.get_single() else {
        return;
    };
    if let Ok(mut transform) = sprite_query.get_single_mut() {
        let world = grid_settings.cell_to_world(apple.position);
        transform.translation = world.extend(SPRITE_Z);
    }
}

pub fn update_score_text(
    game_state: Res<GameState>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    if let Ok(mut text) = query.get_single_mut() {
        text.0 = format!("Score: {}", game_state.score);
    }
}

/// Shows the game-over overlay while paused, hides it while running.
pub fn update_game_over_overlay(
    game_state: Res<GameState>,
    mut query: Query<(&mut Text, &mut Visibility), With<GameOverText>>,
) {
    if let Ok((mut text, mut visibility)) = query.get_single_mut() {
        match game_state.phase {
            Phase::GameOver => {
                text.0 = format!(
                    "Game is over! Your score is {}\nTo play again press Enter. To exit press Escape!",
                    game_state.score
                );
                *visibility = Visibility::Visible;
            }
            Phase::Running => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
