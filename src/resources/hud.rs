//! Gameplay and title screen UI state.

use bevy_ecs::prelude::Resource;

use crate::resources::dictionary::wrap_text;

/// Characters per definition line.
pub const DEFINITION_LINE_CHARS: usize = 58;

/// Definition of the most recently solved word.
#[derive(Resource, Debug, Clone, Default)]
pub struct DefinitionPanel {
    pub lines: Vec<String>,
}

impl DefinitionPanel {
    /// Show `"WORD: definition"`; an absent definition leaves just `"WORD:"`.
    pub fn show(&mut self, word: &str, definition: &str) {
        let text = format!("{}: {}", word.to_uppercase(), definition);
        self.lines = wrap_text(&text, DEFINITION_LINE_CHARS);
    }
}

/// Keyboard focus among the title screen buttons.
#[derive(Resource, Debug, Clone, Default)]
pub struct TitleMenu {
    pub focus: usize,
    /// The pointer follows the focused button until the mouse moves.
    pub keyboard_driven: bool,
}

impl TitleMenu {
    /// Move focus by `direction`, wrapping around `count` buttons.
    pub fn scroll(&mut self, direction: i32, count: usize) {
        if count == 0 {
            return;
        }
        let count = count as i32;
        self.focus = (self.focus as i32 + direction).rem_euclid(count) as usize;
        self.keyboard_driven = true;
    }
}
