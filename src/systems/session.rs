//! Session bookkeeping and word submission.
//!
//! - [`session_clock_system`] – advances the round clock
//! - [`submit_system`] – scores every live word matching the submitted line and
//!   fires a lazer at each of them
//! - [`abort_session_system`] – Escape ends the round like a lost word does
//! - [`finish_session`] – the single path into the game over state
//! - [`session_in_progress`] – run condition for the gameplay systems

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::lazer::Lazer;
use crate::components::mapposition::MapPosition;
use crate::components::star::Star;
use crate::components::turret::Turret;
use crate::components::tween::{Tween, TweenAttr};
use crate::components::word::{Doomed, Word};
use crate::events::wordsolved::WordSolvedEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{InputState, TextInput};
use crate::resources::session::{GameOverReport, Session};
use crate::resources::tweens::{GameplayTweens, TweenCommands};
use crate::resources::worldtime::WorldTime;
use crate::systems::targeting::{exact_matches, get_distance};

pub fn session_in_progress(session: Option<Res<Session>>) -> bool {
    session.is_some_and(|s| s.is_in_progress())
}

pub fn session_clock_system(world_time: Res<WorldTime>, mut session: ResMut<Session>) {
    session.advance_clock(world_time.delta);
}

/// Move the session to game over, hand the results to the next screen and
/// request the transition. Does nothing if the session already ended.
pub fn finish_session(
    session: &mut Session,
    stars: &Query<&Star>,
    next_state: &mut NextGameState,
    commands: &mut Commands,
) {
    if !session.end() {
        return;
    }
    let report = GameOverReport::from_session(session, stars.iter().copied().collect());
    info!(
        "Game over after {} ms: {} words, {} chars",
        report.game_time, report.num_words, report.num_chars
    );
    commands.insert_resource(report);
    next_state.set(GameStates::GameOver);
}

pub fn abort_session_system(
    input: Res<InputState>,
    mut session: ResMut<Session>,
    stars: Query<&Star>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    if input.back.just_pressed {
        info!("Round abandoned");
        finish_session(&mut session, &stars, &mut next_state, &mut commands);
    }
}

/// Resolve a submitted line against the live words.
///
/// Each exact match scores its length, raises a [`WordSolvedEvent`] and gets a
/// lazer whose flight time in milliseconds equals its length in pixels. The
/// word and lazer are despawned when the flight ends. Until then the word is
/// still live: it can be aimed at and solved again, each time with its own
/// lazer. The input line is cleared whether or not anything matched.
pub fn submit_system(
    mut text_input: ResMut<TextInput>,
    mut session: ResMut<Session>,
    mut tweens: ResMut<GameplayTweens>,
    words: Query<(Entity, &Word, &MapPosition)>,
    turret: Query<&MapPosition, With<Turret>>,
    mut commands: Commands,
) {
    let Some(submitted) = text_input.take_submitted() else {
        return;
    };
    text_input.clear();

    let origin = turret
        .iter()
        .next()
        .map(|p| p.pos)
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });

    let mut live: Vec<(Entity, &Word, &MapPosition)> = words.iter().collect();
    live.sort_by_key(|(_, word, _)| word.serial);
    let hits = exact_matches(
        &submitted,
        live.iter().map(|(entity, word, pos)| ((*entity, pos.pos), word.text.as_str())),
    );

    for (word_entity, target) in hits {
        session.record_solved(&submitted);
        commands.entity(word_entity).insert(Doomed);
        commands.trigger(WordSolvedEvent {
            entity: word_entity,
            word: submitted.clone(),
        });

        let lazer = commands
            .spawn((
                Lazer {
                    word: word_entity,
                    origin_x: origin.x,
                    origin_y: origin.y,
                },
                MapPosition::from(origin),
            ))
            .id();
        let distance = get_distance(origin, target);
        let mut flight: Tween<TweenCommands> = Tween::new(
            lazer,
            [(TweenAttr::X, target.x), (TweenAttr::Y, target.y)],
            distance,
        )
        .with_round_values()
        .with_callback(move |requests: &mut TweenCommands| {
            requests.despawn(word_entity);
            requests.despawn(lazer);
        });
        flight.start(&MapPosition::from(origin));
        tweens.0.add(flight);
        info!(
            "Solved '{}' ({} words, {} chars), lazer flight {:.0} ms",
            submitted, session.num_solved, session.points, distance
        );
    }
}
