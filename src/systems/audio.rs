use crate::components::BackgroundMusic;
use crate::events::{AppleEatenEvent, GameOverEvent, RestartEvent};
use crate::resources::GameAssets;
use bevy::audio::{AudioSink, AudioSinkPlayback};
use bevy::prelude::*;

/// One-shot ding for every apple eaten. Fire-and-forget: the entity despawns
/// itself when playback ends.
pub fn eat_sound_system(
    mut commands: Commands,
    mut eaten_events: EventReader<AppleEatenEvent>,
    assets: Res<GameAssets>,
) {
    for _ in eaten_events.read() {
        commands.spawn((
            AudioPlayer::new(assets.ding.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

/// Crash one-shot plus music pause when the run ends.
pub fn crash_sound_system(
    mut commands: Commands,
    mut game_over_events: EventReader<GameOverEvent>,
    assets: Res<GameAssets>,
    music_query: Query<&AudioSink, With<BackgroundMusic>>,
) {
    if game_over_events.read().next().is_none() {
        return;
    }
    commands.spawn((
        AudioPlayer::new(assets.crash.clone()),
        PlaybackSettings::DESPAWN,
    ));
    if let Ok(sink) = music_query.get_single() {
        sink.pause();
    }
}

pub fn resume_music_system(
    mut restart_events: EventReader<RestartEvent>,
    music_query: Query<&AudioSink, With<BackgroundMusic>>,
) {
    if restart_events.read().next().is_none() {
        return;
    }
    if let Ok(sink) = music_query.get_single() {
        sink.play();
    }
}
