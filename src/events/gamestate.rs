//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level
//! [`crate::resources::gamestate::GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate enter/exit systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::{GameState, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. A pending request is applied to [`GameState`] and
/// cleared, then the exit/enter hooks run. Otherwise nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, resets [`NextGameState`] and copies the new value into
///   [`GameState`], then queues the exit hook of the previous state followed
///   by the enter hook of the new one. Requesting the current state again is
///   a no-op.
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// The hooks are executed by looking up system IDs in [`SystemsStore`] under
/// well-known keys: `"setup"`, `"enter_title"`, `"enter_play"`,
/// `"enter_game_over"`, `"quit_game"` and, on leaving a screen, `"clean_scene"`.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    next_game_state: Option<ResMut<NextGameState>>,
    game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    let (Some(mut next_game_state), Some(mut game_state), Some(systems_store)) =
        (next_game_state, game_state, systems_store)
    else {
        warn!("Game state resources missing, transition ignored");
        return;
    };

    let Some(new_state) = next_game_state.take() else {
        debug!("No state change pending.");
        return;
    };
    if *game_state.get() == new_state {
        debug!("Already in {:?}, transition ignored", new_state);
        return;
    }
    let old_state = game_state.replace(new_state);
    info!("Transitioning from {:?} to {:?}", old_state, new_state);

    if old_state.has_scene() {
        run_hook("clean_scene", &mut commands, &systems_store);
    }
    match new_state.enter_hook() {
        Some(key) => run_hook(key, &mut commands, &systems_store),
        None => debug!("Entered {:?} state", new_state),
    }
}

/// Run the hook registered under `key`, or log that it is missing.
fn run_hook(key: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(key) {
        Some(system_id) => commands.run_system(*system_id),
        None => warn!("No '{}' system registered in SystemsStore", key),
    }
}
