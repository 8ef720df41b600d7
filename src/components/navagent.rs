//! Navigation agent component.
//!
//! A [`NavAgent`] owns the movement of its entity: gameplay code hands it a
//! destination and reads back its velocity. Path planning is out of scope;
//! [`nav_agent_system`](crate::systems::navagent::nav_agent_system) moves the
//! agent along a straight line on the ground plane, which stands in for a
//! navmesh-backed implementation.

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::components::worldtransform::WorldTransform;
use crate::math::{look_rotation, planar, rotate_towards};

/// Distance under which an agent considers itself at its destination.
const ARRIVAL_EPSILON: f32 = 1e-4;

#[derive(Component, Clone, Copy, Debug)]
pub struct NavAgent {
    /// Maximum speed in world units per second.
    pub speed: f32,
    /// Maximum turn rate in degrees per second.
    pub angular_speed: f32,
    /// The agent stops once it is this close to its destination.
    pub stopping_distance: f32,
    pub destination: Option<Vec3>,
    /// Velocity achieved during the last step.
    pub velocity: Vec3,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            speed: 3.5,
            angular_speed: 120.0,
            stopping_distance: 0.0,
            destination: None,
            velocity: Vec3::ZERO,
        }
    }
}

impl NavAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }

    pub fn reset_path(&mut self) {
        self.destination = None;
        self.velocity = Vec3::ZERO;
    }

    pub fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    /// Advance the agent by one frame.
    pub fn step(&mut self, transform: &mut WorldTransform, dt: f32) {
        let Some(destination) = self.destination else {
            self.velocity = Vec3::ZERO;
            return;
        };

        let offset = planar(destination - transform.translation);
        let distance = offset.length();
        if distance <= self.stopping_distance.max(ARRIVAL_EPSILON) {
            self.reset_path();
            return;
        }

        let direction = offset / distance;
        if let Some(look) = look_rotation(direction) {
            transform.rotation =
                rotate_towards(transform.rotation, look, self.angular_speed.to_radians() * dt);
        }

        let travel = (self.speed * dt).min(distance - self.stopping_distance);
        transform.translation += direction * travel;
        self.velocity = if dt > 0.0 {
            direction * (travel / dt)
        } else {
            Vec3::ZERO
        };
    }
}
