//! Walkable ground surfaces and ray queries against them.
//!
//! A [`GroundSurface`] is a bounded horizontal rectangle tagged with a layer.
//! [`raycast_ground`] finds the nearest surface a ray hits, restricted to a
//! [`LayerMask`]. Surfaces are solid from above only: rays travelling upward
//! pass through them.

use bevy_ecs::prelude::Component;
use glam::{Vec2, Vec3};

use crate::resources::camera3d::Ray;

/// Bit set of ground layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer`. Layers outside 0..32 give an empty mask.
    pub const fn layer(layer: u32) -> Self {
        match 1u32.checked_shl(layer) {
            Some(bit) => LayerMask(bit),
            None => LayerMask::NONE,
        }
    }

    pub fn intersects(&self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::layer(0)
    }
}

/// Horizontal walkable rectangle at a fixed height.
#[derive(Component, Clone, Copy, Debug)]
pub struct GroundSurface {
    pub height: f32,
    /// Minimum corner on the (x, z) plane.
    pub min: Vec2,
    /// Maximum corner on the (x, z) plane.
    pub max: Vec2,
    pub layer: LayerMask,
}

impl GroundSurface {
    /// Square surface of half-size `half_extent` centered at `center`.
    pub fn square(center: Vec3, half_extent: f32, layer: LayerMask) -> Self {
        let c = Vec2::new(center.x, center.z);
        let h = Vec2::splat(half_extent);
        Self {
            height: center.y,
            min: c - h,
            max: c + h,
            layer,
        }
    }

    pub fn center(&self) -> Vec3 {
        let c = (self.min + self.max) * 0.5;
        Vec3::new(c.x, self.height, c.y)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Distance along `ray` to this surface, if it is hit within `max_distance`.
    pub fn intersect(&self, ray: &Ray, max_distance: f32) -> Option<f32> {
        if ray.direction.y >= 0.0 {
            return None;
        }
        let distance = (self.height - ray.origin.y) / ray.direction.y;
        if !(0.0..=max_distance).contains(&distance) {
            return None;
        }
        let point = ray.at(distance);
        let inside = (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.z);
        inside.then_some(distance)
    }
}

/// Where a ray met the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Nearest hit among `surfaces` whose layer is in `mask`.
pub fn raycast_ground<'a>(
    surfaces: impl IntoIterator<Item = &'a GroundSurface>,
    ray: &Ray,
    max_distance: f32,
    mask: LayerMask,
) -> Option<RaycastHit> {
    surfaces
        .into_iter()
        .filter(|surface| surface.layer.intersects(mask))
        .filter_map(|surface| surface.intersect(ray, max_distance))
        .min_by(|a, b| a.total_cmp(b))
        .map(|distance| RaycastHit {
            point: ray.at(distance),
            distance,
        })
}
