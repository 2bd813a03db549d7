//! The player's turret.
//!
//! The barrel turns towards a target angle at a fixed rate and never overshoots
//! it. Angles are radians in screen space with y pointing down, so `PI / 2` aims
//! straight up.

use std::f32::consts::FRAC_PI_2;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Radians per millisecond.
pub const TURRET_ROTATION_SPEED: f32 = 0.005;
pub const TURRET_BASE_WIDTH: f32 = 62.0;
pub const TURRET_BASE_HEIGHT: f32 = 40.0;
/// Distance from the bottom of the screen to the bottom of the base.
pub const TURRET_BOTTOM_MARGIN: f32 = 65.0;
/// Barrel centre relative to the top-left corner of the base.
pub const BARREL_OFFSET: Vector2 = Vector2 { x: 31.0, y: 7.0 };
pub const BARREL_LENGTH: f32 = 34.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Turret {
    pub angle: f32,
    pub target_angle: f32,
    pub rotation_speed: f32,
}

impl Default for Turret {
    fn default() -> Self {
        Self::new()
    }
}

impl Turret {
    /// Barrel pointing right, already turning to face up.
    pub fn new() -> Self {
        let mut turret = Turret {
            angle: 0.0,
            target_angle: 0.0,
            rotation_speed: TURRET_ROTATION_SPEED,
        };
        turret.seek_angle(FRAC_PI_2);
        turret
    }

    pub fn seek_angle(&mut self, target_angle: f32) {
        self.target_angle = target_angle;
    }

    /// Turn towards `target_angle` by at most `rotation_speed * dt`.
    pub fn update(&mut self, dt: f32) {
        let step = self.rotation_speed * dt.max(0.0);
        if self.angle < self.target_angle {
            self.angle += step.min(self.target_angle - self.angle);
        } else if self.angle > self.target_angle {
            self.angle -= step.min(self.angle - self.target_angle);
        }
    }
}

/// Base rectangle for a screen of the given size.
pub fn turret_base_rect(screen_w: f32, screen_h: f32) -> Rectangle {
    Rectangle {
        x: screen_w * 0.5 - TURRET_BASE_WIDTH * 0.5,
        y: screen_h - TURRET_BOTTOM_MARGIN - TURRET_BASE_HEIGHT,
        width: TURRET_BASE_WIDTH,
        height: TURRET_BASE_HEIGHT,
    }
}

/// Where lazers leave the barrel.
pub fn barrel_center(screen_w: f32, screen_h: f32) -> Vector2 {
    let base = turret_base_rect(screen_w, screen_h);
    Vector2 {
        x: base.x + BARREL_OFFSET.x,
        y: base.y + BARREL_OFFSET.y,
    }
}

/// Point the turret aims from.
pub fn base_center(screen_w: f32, screen_h: f32) -> Vector2 {
    let base = turret_base_rect(screen_w, screen_h);
    Vector2 {
        x: base.x + base.width * 0.5,
        y: base.y + base.height * 0.5,
    }
}
