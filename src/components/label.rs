//! Screen-space text.
//!
//! [`Label`] is static text anchored at a point; [`Blinker`] toggles a label's
//! visibility on a fixed period. The HUD and game over screen are built from
//! these.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// How a label's position relates to its text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    MidTop,
    MidBottom,
    Center,
}

/// What a label shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelText {
    Static(String),
    /// Session clock, formatted each frame.
    GameTime,
    WordsSolved,
    CharsScored,
    /// Definition of the last solved word.
    Definition,
}

#[derive(Component, Debug, Clone)]
pub struct Label {
    pub text: LabelText,
    pub pos: Vector2,
    pub anchor: Anchor,
    pub font_size: i32,
    pub color: Color,
    pub visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, pos: Vector2, anchor: Anchor, font_size: i32) -> Self {
        Label {
            text: LabelText::Static(text.into()),
            pos,
            anchor,
            font_size,
            color: Color::WHITE,
            visible: true,
        }
    }
    pub fn bound(text: LabelText, pos: Vector2, anchor: Anchor, font_size: i32) -> Self {
        Label {
            text,
            pos,
            anchor,
            font_size,
            color: Color::WHITE,
            visible: true,
        }
    }
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Flips the sibling [`Label`]'s visibility every `period` milliseconds.
#[derive(Component, Debug, Clone)]
pub struct Blinker {
    pub period: f32,
    pub timer: f32,
    /// Re-pick the label colour from the ship palette each time it hides.
    pub recolor: bool,
}

impl Blinker {
    pub fn new(period: f32) -> Self {
        Blinker {
            period,
            timer: 0.0,
            recolor: false,
        }
    }
    pub fn with_recolor(mut self) -> Self {
        self.recolor = true;
        self
    }

    /// Returns how many times visibility flips during `dt`.
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.timer += dt;
        let mut flips = 0;
        while self.period > 0.0 && self.timer >= self.period {
            self.timer -= self.period;
            flips += 1;
        }
        flips
    }
}
