//! Title screen difficulty buttons.
//!
//! A [`MaskedButton`] is a square widget that springs larger while hovered and
//! squeezes while pressed. Size changes are tweens held in the button's own
//! [`ButtonTweens`] group: every change clears the group and starts a fresh
//! `ElasticOut` tween from the current size, so retargeting mid-animation
//! continues smoothly from wherever the button is.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::tween::{Easing, Tween, TweenAttr, TweenGroup, Tweenable};
use crate::resources::session::Difficulty;

/// Milliseconds for every size change.
pub const INFLATE_MS: f32 = 120.0;

#[derive(Component, Debug, Clone)]
pub struct MaskedButton {
    pub center: Vector2,
    /// Current edge length.
    pub size: f32,
    pub initial_size: f32,
    /// Pressed size.
    pub low: f32,
    /// Hovered size.
    pub high: f32,
    pub hovered: bool,
    pub held: bool,
    pub difficulty: Difficulty,
}

impl MaskedButton {
    pub fn new(center: Vector2, size: f32, difficulty: Difficulty) -> Self {
        MaskedButton {
            center,
            size,
            initial_size: size,
            low: (size * 0.95).floor(),
            high: (size * 1.2).floor(),
            hovered: false,
            held: false,
            difficulty,
        }
    }

    /// Hit test against the square at its current size.
    pub fn contains(&self, point: Vector2) -> bool {
        let half = self.size * 0.5;
        (point.x - self.center.x).abs() <= half && (point.y - self.center.y).abs() <= half
    }
}

impl Tweenable for MaskedButton {
    fn tween_value(&self, attr: TweenAttr) -> Option<f32> {
        match attr {
            TweenAttr::Size => Some(self.size),
            TweenAttr::X => Some(self.center.x),
            TweenAttr::Y => Some(self.center.y),
        }
    }

    fn set_tween_value(&mut self, attr: TweenAttr, value: f32) {
        match attr {
            TweenAttr::Size => self.size = value,
            TweenAttr::X => self.center.x = value,
            TweenAttr::Y => self.center.y = value,
        }
    }
}

/// Size tweens owned by one button.
#[derive(Component, Default)]
pub struct ButtonTweens(pub TweenGroup);

impl ButtonTweens {
    /// Replace whatever is running with a tween to `target` size.
    pub fn inflate(&mut self, owner: Entity, button: &MaskedButton, target: f32) {
        self.0.clear();
        let mut tween = Tween::new(owner, [(TweenAttr::Size, target)], INFLATE_MS)
            .with_easing(Easing::ElasticOut);
        tween.start(button);
        self.0.add(tween);
    }
}
