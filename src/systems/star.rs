//! Background star system.

use bevy_ecs::prelude::*;

use crate::components::star::{Star, TWINKLE_RANGE};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

pub fn star_system(
    world_time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut rng: ResMut<GameRng>,
    mut query: Query<&mut Star>,
) {
    let dt = world_time.delta;
    let width = screen.width();
    for mut star in query.iter_mut() {
        star.update(dt, width, || rng.0.u32(TWINKLE_RANGE.0..=TWINKLE_RANGE.1) as f32);
    }
}

/// Scatter `count` stars over the sky above the hills.
pub fn random_stars(count: u32, screen: &ScreenSize, rng: &mut fastrand::Rng) -> Vec<Star> {
    let max_x = screen.w.max(2);
    let max_y = (screen.h - 150).max(2);
    (0..count)
        .map(|_| {
            Star::new(
                rng.i32(1..=max_x) as f32,
                rng.i32(1..=max_y) as f32,
                rng.u32(0..=4) as f32,
                rng.u32(TWINKLE_RANGE.0..=TWINKLE_RANGE.1) as f32,
                rng.f32(),
            )
        })
        .collect()
}
