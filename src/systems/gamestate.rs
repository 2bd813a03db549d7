//! State transition polling and run conditions.

use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::prelude::*;

/// Fire a [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if next_state.is_pending() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

pub fn state_is_title(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Title)
}

pub fn state_is_game_over(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::GameOver)
}

/// Screens that show free-running stars. During play the stars advance as
/// part of the gameplay chain instead.
pub fn state_shows_stars(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Title | GameStates::GameOver)
}
