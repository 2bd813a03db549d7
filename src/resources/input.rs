//! Per-frame input resources.
//!
//! [`InputState`] captures the keys and mouse state the screens react to.
//! [`TextInput`] is the line the player types into during gameplay: systems
//! only ever see its buffer and a one-shot submitted line.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        BoolState {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Write this frame's raw state, deriving the edges from the previous one.
    pub fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Mouse pointer and primary button.
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub pos: Vector2,
    /// Pointer moved since the previous frame.
    pub moved: bool,
    pub left_down: bool,
    pub left_pressed: bool,
    pub left_released: bool,
}

impl Default for MouseState {
    fn default() -> Self {
        MouseState {
            pos: Vector2 { x: -1.0, y: -1.0 },
            moved: false,
            left_down: false,
            left_pressed: false,
            left_released: false,
        }
    }
}

/// Resource capturing the per-frame keyboard and mouse state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    /// Enter: activate the focused button, submit the typed line.
    pub confirm: BoolState,
    /// Escape: end the round or quit.
    pub back: BoolState,
    /// Space: leave the game over screen.
    pub proceed: BoolState,
    pub backspace: BoolState,
    pub mouse: MouseState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound_to(KeyboardKey::KEY_UP),
            down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            proceed: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            backspace: BoolState::bound_to(KeyboardKey::KEY_BACKSPACE),
            mouse: MouseState::default(),
        }
    }
}

/// Longest line the text box accepts.
pub const MAX_INPUT_CHARS: usize = 24;

/// The player's typing line.
#[derive(Resource, Debug, Clone, Default)]
pub struct TextInput {
    pub buffer: String,
    /// Line committed this frame, taken by the submission system.
    pub submitted: Option<String>,
}

impl TextInput {
    /// Append a typed character. Only ASCII letters are accepted; they are
    /// lowercased since every playable word is lowercase.
    pub fn push(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.buffer.len() < MAX_INPUT_CHARS {
            self.buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Commit the current line. Empty lines are ignored.
    pub fn submit(&mut self) {
        if !self.buffer.is_empty() {
            self.submitted = Some(self.buffer.clone());
        }
    }

    pub fn take_submitted(&mut self) -> Option<String> {
        self.submitted.take()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.submitted = None;
    }
}
