//! Word systems.
//!
//! - [`word_spawner_system`] – spawns one word each time the session's spawn
//!   timer comes due, cycling through the spawn slots
//! - [`word_movement_system`] – scrolls words left at their speed
//! - [`word_frames_system`] – cycles ship frames
//! - [`word_escape_system`] – ends the session when a word leaves the screen
//!
//! [`spawn_random_word`] is shared with the gameplay enter hook, which spawns
//! the first word of a round immediately.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animation::FrameAnimation;
use crate::components::mapposition::MapPosition;
use crate::components::star::Star;
use crate::components::word::{SHIP_FRAME_MS, SHIP_FRAMES, SHIP_PALETTES, Word, is_offscreen_left};
use crate::resources::dictionary::Dictionary;
use crate::resources::gamestate::NextGameState;
use crate::resources::rng::GameRng;
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;
use crate::systems::session::finish_session;

/// Spawn a word drawn from `dictionary` at the session's next spawn slot.
///
/// Returns `None` and spawns nothing when the dictionary is empty.
pub fn spawn_random_word(
    commands: &mut Commands,
    session: &mut Session,
    dictionary: &Dictionary,
    rng: &mut fastrand::Rng,
) -> Option<Entity> {
    let Some(text) = dictionary.sample(rng) else {
        warn!("Dictionary is empty, no word spawned");
        return None;
    };
    let (slot, serial) = session.take_spawn_slot();
    let palette = rng.usize(..SHIP_PALETTES);
    let entity = commands
        .spawn((
            Word::new(text, session.params.word_speed, serial, palette),
            MapPosition::from(slot),
            FrameAnimation::new(SHIP_FRAMES, SHIP_FRAME_MS),
        ))
        .id();
    debug!("Spawned word '{}' #{} at ({}, {})", text, serial, slot.x, slot.y);
    Some(entity)
}

pub fn word_spawner_system(
    world_time: Res<WorldTime>,
    mut session: ResMut<Session>,
    dictionary: Res<Dictionary>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    if session.tick_spawn_timer(world_time.delta) {
        spawn_random_word(&mut commands, &mut session, &dictionary, &mut rng.0);
    }
}

pub fn word_movement_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&Word, &mut MapPosition)>,
) {
    let dt = world_time.delta;
    for (word, mut position) in query.iter_mut() {
        position.pos.x -= word.speed * dt;
    }
}

pub fn word_frames_system(
    world_time: Res<WorldTime>,
    mut query: Query<&mut FrameAnimation, With<Word>>,
) {
    for mut animation in query.iter_mut() {
        animation.advance(world_time.delta);
    }
}

/// End the round as soon as any word's ship box is entirely off the left edge.
pub fn word_escape_system(
    mut session: ResMut<Session>,
    words: Query<(&Word, &MapPosition)>,
    stars: Query<&Star>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    if !session.is_in_progress() {
        return;
    }
    let Some((word, _)) = words
        .iter()
        .find(|(_, position)| is_offscreen_left(position.pos))
    else {
        return;
    };
    info!("Word '{}' got past the turret", word.text);
    finish_session(&mut session, &stars, &mut next_state, &mut commands);
}
