//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. Spawn slots, the turret and
//! the HUD are laid out from it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }
    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
