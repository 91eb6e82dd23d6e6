use bevy::prelude::*;
use std::path::Path;

mod components;
mod events;
mod resources;
mod systems;

use components::*;
use events::{AppleEatenEvent, GameOverEvent, RestartEvent};
use resources::*;
use systems::audio::*;
use systems::collision::*;
use systems::game_over::*;
use systems::input::*;
use systems::movement::*;
use systems::render::*;

const REQUIRED_ASSETS: [&str; 6] = [
    "sprites/apple.png",
    "sprites/block.png",
    "sprites/background.png",
    "audio/bg_music.ogg",
    "audio/ding.ogg",
    "audio/crash.ogg",
];

fn main() {
    verify_assets();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Snake".into(),
                resolution: (1000., 800.).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.36, 0.10, 0.33)))
        .add_event::<AppleEatenEvent>()
        .add_event::<GameOverEvent>()
        .add_event::<RestartEvent>()
        .insert_resource(GameState::default())
        .insert_resource(TickTimer::default())
        .insert_resource(PendingDirection::default())
        .add_systems(Startup, setup_game)
        .add_systems(
            Update,
            (
                keyboard_input_system,
                snake_tick_system,
                collision_detection_system,
                handle_game_over,
                handle_restart,
                eat_sound_system,
                crash_sound_system,
                resume_music_system,
                sync_snake_sprites,
                sync_apple_sprite,
                update_score_text,
                update_game_over_overlay,
            )
                .chain(),
        )
        .run();
}

/// Every asset is required; report all the missing ones at once and bail
/// before the window ever opens.
fn verify_assets() {
    let missing: Vec<&str> = REQUIRED_ASSETS
        .iter()
        .copied()
        .filter(|path| !Path::new("assets").join(path).exists())
        .collect();
    if !missing.is_empty() {
        eprintln!("missing required asset files under assets/:");
        for path in &missing {
            eprintln!("  {path}");
        }
        std::process::exit(1);
    }
}

fn setup_game(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Spawn camera
    commands.spawn(Camera2d::default());

    let grid_settings = GridSettings::default();
    commands.insert_resource(grid_settings.clone());

    let assets = GameAssets {
        apple: asset_server.load("sprites/apple.png"),
        block: asset_server.load("sprites/block.png"),
        background: asset_server.load("sprites/background.png"),
        music: asset_server.load("audio/bg_music.ogg"),
        ding: asset_server.load("audio/ding.ogg"),
        crash: asset_server.load("audio/crash.ogg"),
    };

    // Full-window background image behind everything else
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(
                grid_settings.grid_width as f32 * grid_settings.cell_size,
                grid_settings.grid_height as f32 * grid_settings.cell_size,
            )),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, -0.1)),
    ));

    // The snake entity carries only game state; its segment sprites are
    // spawned and kept in sync by the render system.
    commands.spawn(Snake::spawn(grid_settings.snake_spawn(), INITIAL_DIRECTION));

    // Apple state and sprite live on one entity
    let apple = Apple::spawn(grid_settings.apple_spawn());
    let apple_world = grid_settings.cell_to_world(apple.position);
    commands.spawn((
        apple,
        Sprite {
            image: assets.apple.clone(),
            custom_size: Some(Vec2::splat(grid_settings.cell_size)),
            ..default()
        },
        Transform::from_translation(apple_world.extend(1.0)),
        AppleSprite,
    ));

    // Background music loops for the whole session; game over pauses it
    commands.spawn((
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::LOOP,
        BackgroundMusic,
    ));

    // Score HUD in the top-right corner
    commands.spawn((
        Text::new("Score: 1"),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::srgb(0.78, 0.78, 0.78)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(20.0),
            ..default()
        },
        ScoreText,
    ));

    // Game-over overlay, hidden while the run is live
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::srgb(0.78, 0.78, 0.78)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(300.0),
            left: Val::Px(200.0),
            ..default()
        },
        Visibility::Hidden,
        GameOverText,
    ));

    commands.insert_resource(assets);
}
