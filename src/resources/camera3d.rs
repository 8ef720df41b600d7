//! Shared 3D camera resource.
//!
//! [`Camera3DRes`] is the single active camera: the camera rig moves it, the
//! click-to-move controller casts rays through it, and the renderer views the
//! world through it.
//!
//! The camera looks along its local +Z axis. Like most scene cameras it keeps
//! an orthographic size even while in perspective mode; the rig uses that
//! value as its zoom target in both modes.

use bevy_ecs::prelude::Resource;
use glam::{Quat, Vec2, Vec3};

use crate::math::yaw_of;
use crate::resources::screensize::ScreenSize;

/// Projection used by the active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "orthographic" | "ortho" => Some(Self::Orthographic),
            "perspective" => Some(Self::Perspective),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Orthographic => "orthographic",
            Self::Perspective => "perspective",
        }
    }
}

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// ECS resource that holds the active camera's pose and projection.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Camera3DRes {
    pub position: Vec3,
    pub rotation: Quat,
    pub projection: ProjectionMode,
    /// Half of the vertical view extent, in world units.
    pub orthographic_size: f32,
    /// Vertical field of view in degrees (perspective only).
    pub fov_y: f32,
}

impl Default for Camera3DRes {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            projection: ProjectionMode::Orthographic,
            orthographic_size: 5.0,
            fov_y: 60.0,
        }
    }
}

impl Camera3DRes {
    pub fn is_orthographic(&self) -> bool {
        self.projection == ProjectionMode::Orthographic
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Rotation about the vertical axis, in radians.
    pub fn yaw(&self) -> f32 {
        yaw_of(self.rotation)
    }

    /// Ray from the camera through a screen point (pixels, origin top-left).
    ///
    /// Orthographic rays are parallel to the view direction and start on the
    /// camera plane; perspective rays start at the camera position and fan
    /// out according to the vertical field of view.
    pub fn screen_point_to_ray(&self, point: Vec2, screen: ScreenSize) -> Ray {
        let size = screen.as_vec2().max(Vec2::ONE);
        let ndc_x = 2.0 * point.x / size.x - 1.0;
        let ndc_y = 1.0 - 2.0 * point.y / size.y;
        let aspect = screen.aspect();

        match self.projection {
            ProjectionMode::Orthographic => {
                let half_h = self.orthographic_size;
                let half_w = half_h * aspect;
                let origin =
                    self.position + self.right() * (ndc_x * half_w) + self.up() * (ndc_y * half_h);
                Ray::new(origin, self.forward())
            }
            ProjectionMode::Perspective => {
                let tan_half = (self.fov_y.to_radians() * 0.5).tan();
                let direction = self.forward()
                    + self.right() * (ndc_x * tan_half * aspect)
                    + self.up() * (ndc_y * tan_half);
                Ray::new(self.position, direction)
            }
        }
    }
}
