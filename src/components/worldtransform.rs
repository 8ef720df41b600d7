//! World-space pose for 3D entities.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Position and orientation of an entity. Local +Z is the facing direction.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl WorldTransform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}
