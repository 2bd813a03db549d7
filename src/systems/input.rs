//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes it into [`InputState`]. While a round is being played, typed
//! characters, Backspace and Enter are also applied to the [`TextInput`] line
//! through [`apply_typing`].
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{InputState, TextInput};

/// Poll Raylib for keyboard and mouse input.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut text_input: ResMut<TextInput>,
    state: Res<GameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let up = is_key_down(input.up.key_binding);
    let down = is_key_down(input.down.key_binding);
    let confirm = is_key_down(input.confirm.key_binding);
    let back = is_key_down(input.back.key_binding);
    let proceed = is_key_down(input.proceed.key_binding);
    let backspace = is_key_down(input.backspace.key_binding);
    input.up.set(up);
    input.down.set(down);
    input.confirm.set(confirm);
    input.back.set(back);
    input.proceed.set(proceed);
    input.backspace.set(backspace);

    let pos = rl.get_mouse_position();
    let left_down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    let mouse = &mut input.mouse;
    mouse.moved = pos.x != mouse.pos.x || pos.y != mouse.pos.y;
    mouse.pos = pos;
    mouse.left_pressed = left_down && !mouse.left_down;
    mouse.left_released = !left_down && mouse.left_down;
    mouse.left_down = left_down;

    // Drain the character queue every frame so keys typed on other screens
    // do not show up in the next round.
    let mut typed = Vec::new();
    while let Some(c) = rl.get_char_pressed() {
        typed.push(c);
    }
    if *state.get() == GameStates::Playing {
        apply_typing(&mut text_input, &typed, &input);
    }
}

/// Apply one frame of typing to the line: characters first, then Backspace,
/// then Enter.
pub fn apply_typing(text_input: &mut TextInput, typed: &[char], input: &InputState) {
    for &c in typed {
        text_input.push(c);
    }
    if input.backspace.just_pressed {
        text_input.backspace();
    }
    if input.confirm.just_pressed {
        text_input.submit();
    }
}
