//! Background stars.
//!
//! Purely cosmetic. Each star twinkles for one frame whenever its timer
//! reaches a randomly chosen frequency, and drifts left slowly at a speed set
//! by its depth, wrapping around to the right edge.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Bounds for the random twinkle frequency, in milliseconds.
pub const TWINKLE_RANGE: (u32, u32) = (200, 2000);
/// Drift speed of the nearest stars, in pixels per millisecond.
pub const MAX_DRIFT: f32 = 0.004;

#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub timer: f32,
    pub frequency: f32,
    /// 0.0 (far, still) to 1.0 (near, fastest drift).
    pub depth: f32,
    pub twinkling: bool,
}

impl Star {
    pub fn new(x: f32, y: f32, timer: f32, frequency: f32, depth: f32) -> Self {
        Star {
            x,
            y,
            timer,
            frequency,
            depth: depth.clamp(0.0, 1.0),
            twinkling: false,
        }
    }

    /// Advance the twinkle timer and drift. `next_frequency` is called when the
    /// star twinkles to pick the wait before the next one.
    pub fn update(&mut self, dt: f32, screen_w: f32, next_frequency: impl FnOnce() -> f32) {
        self.twinkling = false;
        self.timer += dt;
        if self.timer >= self.frequency {
            self.timer -= self.frequency;
            self.twinkling = true;
            self.frequency = next_frequency();
        }
        self.x -= MAX_DRIFT * self.depth * dt;
        if self.x < 0.0 {
            self.x += screen_w;
        }
    }
}
