//! Game over screen systems.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::label::{Blinker, Label};
use crate::components::word::SHIP_COLORS;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

/// Toggle blinking labels. A recolouring blinker picks a new ship colour
/// every time its label hides, so it reappears in a different colour.
pub fn blinker_system(
    world_time: Res<WorldTime>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(&mut Blinker, &mut Label)>,
) {
    for (mut blinker, mut label) in query.iter_mut() {
        let flips = blinker.tick(world_time.delta);
        for _ in 0..flips {
            label.visible = !label.visible;
            if blinker.recolor && !label.visible {
                label.color = SHIP_COLORS[rng.0.usize(..SHIP_COLORS.len())];
            }
        }
    }
}

pub fn game_over_input_system(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if next_state.is_pending() {
        return;
    }
    if input.back.just_pressed {
        next_state.set(GameStates::Quitting);
    } else if input.proceed.just_released || input.mouse.left_released {
        info!("Back to the title screen");
        next_state.set(GameStates::Title);
    }
}
