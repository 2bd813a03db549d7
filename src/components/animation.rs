//! Looping sprite-sheet frame cursor.
//!
//! Word ships cycle through a fixed strip of frames. [`FrameAnimation`] keeps
//! the current frame and the time spent on it; the
//! [`word_frames_system`](crate::systems::word::word_frames_system) advances it.

use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Component)]
pub struct FrameAnimation {
    pub frame_index: usize,
    pub frame_count: usize,
    /// Milliseconds each frame stays on screen.
    pub frame_duration: f32,
    pub elapsed_time: f32,
}

impl FrameAnimation {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        Self {
            frame_index: 0,
            frame_count: frame_count.max(1),
            frame_duration,
            elapsed_time: 0.0,
        }
    }

    /// Accumulate `dt` and step at most one frame, keeping the remainder.
    ///
    /// Returns true when the frame changed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed_time += dt;
        if self.elapsed_time >= self.frame_duration {
            self.elapsed_time -= self.frame_duration;
            self.frame_index = (self.frame_index + 1) % self.frame_count;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_animation_keeps_remainder() {
        let mut anim = FrameAnimation::new(8, 120.0);
        assert!(!anim.advance(100.0));
        assert!(anim.advance(50.0));
        assert_eq!(anim.frame_index, 1);
        assert!((anim.elapsed_time - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_frame_animation_wraps() {
        let mut anim = FrameAnimation::new(3, 10.0);
        for _ in 0..3 {
            anim.advance(10.0);
        }
        assert_eq!(anim.frame_index, 0);
    }
}
