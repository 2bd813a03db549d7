//! Word ships.
//!
//! A [`Word`] is a target the player destroys by typing its text. Its
//! [`MapPosition`](crate::components::mapposition::MapPosition) is the centre
//! of a `184x144` ship box; the text label sits near the bottom of that box.
//! Words scroll leftwards at a constant speed and end the session once the
//! whole box has left the screen.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Rectangle, Vector2};

/// Width of a ship frame in pixels.
pub const WORD_WIDTH: f32 = 184.0;
/// Height of a ship frame in pixels.
pub const WORD_HEIGHT: f32 = 144.0;
/// Label centre relative to the top-left corner of the ship box.
pub const LABEL_OFFSET: Vector2 = Vector2 { x: 92.0, y: 104.0 };
/// Frames in a ship strip.
pub const SHIP_FRAMES: usize = 8;
/// Milliseconds per ship frame.
pub const SHIP_FRAME_MS: f32 = 120.0;
/// Number of ship colour schemes.
pub const SHIP_PALETTES: usize = 7;

/// Hull colour of each ship scheme. The game over title also cycles these.
pub const SHIP_COLORS: [Color; SHIP_PALETTES] = [
    Color { r: 230, g: 41, b: 55, a: 255 },
    Color { r: 255, g: 161, b: 0, a: 255 },
    Color { r: 253, g: 249, b: 0, a: 255 },
    Color { r: 0, g: 228, b: 48, a: 255 },
    Color { r: 0, g: 121, b: 241, a: 255 },
    Color { r: 200, g: 122, b: 255, a: 255 },
    Color { r: 255, g: 109, b: 194, a: 255 },
];

#[derive(Component, Debug, Clone)]
pub struct Word {
    pub text: String,
    /// Horizontal speed in pixels per millisecond.
    pub speed: f32,
    /// Spawn order. Candidates are matched in this order.
    pub serial: u64,
    /// Index into the ship colour schemes.
    pub palette: usize,
}

impl Word {
    pub fn new(text: impl Into<String>, speed: f32, serial: u64, palette: usize) -> Self {
        Word {
            text: text.into(),
            speed,
            serial,
            palette: palette % SHIP_PALETTES,
        }
    }
}

/// Marks a word that a lazer is already flying at. The word stays live
/// until the lazer lands; only its label is drawn differently.
#[derive(Component, Debug, Clone, Copy)]
pub struct Doomed;

/// Ship box of a word whose centre is `pos`.
pub fn word_rect(pos: Vector2) -> Rectangle {
    Rectangle {
        x: pos.x - WORD_WIDTH * 0.5,
        y: pos.y - WORD_HEIGHT * 0.5,
        width: WORD_WIDTH,
        height: WORD_HEIGHT,
    }
}

/// Centre of the text label of a word whose centre is `pos`.
pub fn label_center(pos: Vector2) -> Vector2 {
    let rect = word_rect(pos);
    Vector2 {
        x: rect.x + LABEL_OFFSET.x,
        y: rect.y + LABEL_OFFSET.y,
    }
}

/// Whether the whole ship box is past the left edge of the screen.
pub fn is_offscreen_left(pos: Vector2) -> bool {
    let rect = word_rect(pos);
    rect.x + rect.width < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_center_is_below_ship_center() {
        let c = label_center(Vector2 { x: 500.0, y: 200.0 });
        assert_eq!(c.x, 500.0);
        assert_eq!(c.y, 232.0);
    }

    #[test]
    fn test_offscreen_needs_whole_box_past_edge() {
        assert!(!is_offscreen_left(Vector2 { x: -92.0, y: 0.0 }));
        assert!(is_offscreen_left(Vector2 { x: -92.5, y: 0.0 }));
    }
}
