use bevy_ecs::prelude::{Component, Entity};

/// A shot in flight towards `word`.
///
/// The head position is a [`MapPosition`](crate::components::mapposition::MapPosition)
/// driven by a tween; `origin` is where it left the barrel.
#[derive(Component, Debug, Clone, Copy)]
pub struct Lazer {
    pub word: Entity,
    pub origin_x: f32,
    pub origin_y: f32,
}
