//! Screen size resource.
//!
//! Pixel dimensions of the drawable area. The camera rig compares the pointer
//! against these to detect edge scrolling, and the active camera uses them to
//! turn a pointer position into a world-space ray.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }

    /// Width over height, or 1.0 for a degenerate (minimized) window.
    pub fn aspect(&self) -> f32 {
        if self.w <= 0 || self.h <= 0 {
            1.0
        } else {
            self.w as f32 / self.h as f32
        }
    }
}
