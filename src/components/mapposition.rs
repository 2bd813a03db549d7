//! World-space position of an entity.
//!
//! [`MapPosition`] is the pivot every drawable is placed from: the centre of a
//! word's ship, the barrel of the turret, the head of a lazer. Tweens drive its
//! `x`/`y` through [`Tweenable`](crate::components::tween::Tweenable).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}

impl From<Vector2> for MapPosition {
    fn from(pos: Vector2) -> Self {
        MapPosition { pos }
    }
}
