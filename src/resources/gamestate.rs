//! Screen flow resources.
//!
//! [`GameState`] is the screen currently shown; [`NextGameState`] holds a
//! transition some system asked for. Requests are applied at the start of the
//! next frame by `crate::events::gamestate::observe_gamestate_change_event`,
//! which also runs the hooks named here.

use bevy_ecs::prelude::Resource;

/// Screens and lifecycle states.
///
/// `None → Setup → Title → Playing → GameOver → Title …`, with `Quitting`
/// reachable from any screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    /// Difficulty selection.
    Title,
    Playing,
    /// Round summary.
    GameOver,
    Quitting,
}

impl GameStates {
    /// `SystemsStore` key of the hook run when this state is entered.
    pub fn enter_hook(self) -> Option<&'static str> {
        match self {
            GameStates::None => None,
            GameStates::Setup => Some("setup"),
            GameStates::Title => Some("enter_title"),
            GameStates::Playing => Some("enter_play"),
            GameStates::GameOver => Some("enter_game_over"),
            GameStates::Quitting => Some("quit_game"),
        }
    }

    /// Whether this state builds a scene of its own, torn down on exit.
    pub fn has_scene(self) -> bool {
        matches!(
            self,
            GameStates::Title | GameStates::Playing | GameStates::GameOver
        )
    }
}

/// A transition request, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Switch to `state` right away and return the one left behind. Hooks
    /// only run for transitions requested through [`NextGameState`].
    pub fn replace(&mut self, state: GameStates) -> GameStates {
        std::mem::replace(&mut self.current, state)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Ask for `next`. A later request in the same frame wins.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextGameStates::Pending(_))
    }

    /// Consume the request, leaving [`NextGameStates::Unchanged`].
    pub fn take(&mut self) -> Option<GameStates> {
        match std::mem::take(&mut self.next) {
            NextGameStates::Pending(state) => Some(state),
            NextGameStates::Unchanged => None,
        }
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
