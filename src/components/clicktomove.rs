//! Click-to-move controller component.
//!
//! An entity with [`ClickToMove`] walks to wherever the player clicks on the
//! ground. The controller is either *self-steering* (it turns and moves the
//! entity's [`WorldTransform`] itself) or *delegated* (a
//! [`NavAgent`](super::navagent::NavAgent) on the same entity does the
//! moving and the controller only hands it destinations).
//!
//! State machine:
//!
//! ```text
//!   Idle ──click hits ground──▶ Moving ──planar distance < STOP_DISTANCE──▶ Idle
//!                               Moving ──click hits ground──▶ Moving (new destination)
//! ```
//!
//! The systems driving it live in [`crate::systems::clicktomove`].

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

use crate::components::groundsurface::LayerMask;
use crate::components::worldtransform::WorldTransform;
use crate::math::{look_rotation, planar, planar_distance, slerp};

/// Planar distance at which a destination counts as reached.
pub const STOP_DISTANCE: f32 = 0.1;
/// How far a click ray may travel before it is considered a miss.
pub const RAYCAST_MAX_DISTANCE: f32 = 100.0;
/// Speed above which a delegated agent counts as moving for animation.
pub const MOVING_SPEED_THRESHOLD: f32 = 0.1;

/// Author-time tunables for click-to-move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickToMoveConfig {
    /// World units per second.
    pub move_speed: f32,
    /// Slerp rate toward the walking direction, per second.
    pub rotation_speed: f32,
}

impl Default for ClickToMoveConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            rotation_speed: 10.0,
        }
    }
}

impl ClickToMoveConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.move_speed >= 0.0) {
            return Err(format!("move_speed must be >= 0 (got {})", self.move_speed));
        }
        if !(self.rotation_speed >= 0.0) {
            return Err(format!(
                "rotation_speed must be >= 0 (got {})",
                self.rotation_speed
            ));
        }
        Ok(())
    }

    /// Agent turn rate matching this controller's feel, in degrees per second.
    pub fn agent_angular_speed(&self) -> f32 {
        self.rotation_speed * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Idle,
    Moving,
}

/// Destination plus whether the controller is still heading there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    pub destination: Vec3,
    pub moving: bool,
}

/// Result of one self-steering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to do.
    Idle,
    /// Moved closer, destination not reached yet.
    Moved,
    /// Destination reached this frame; the controller is now idle.
    Arrived,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct ClickToMove {
    pub config: ClickToMoveConfig,
    /// Ground layers a click may land on.
    pub ground_layers: LayerMask,
    /// Optional marker entity shown at the destination.
    pub marker: Option<Entity>,
    pub target: MotionTarget,
}

impl ClickToMove {
    /// Idle controller. The destination is seeded from the entity's position
    /// when the component is first seen by the click-to-move systems.
    pub fn new(config: ClickToMoveConfig) -> Self {
        Self {
            config,
            ground_layers: LayerMask::default(),
            marker: None,
            target: MotionTarget {
                destination: Vec3::ZERO,
                moving: false,
            },
        }
    }

    pub fn with_marker(mut self, marker: Entity) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_ground_layers(mut self, ground_layers: LayerMask) -> Self {
        self.ground_layers = ground_layers;
        self
    }

    pub fn state(&self) -> MotionState {
        if self.target.moving {
            MotionState::Moving
        } else {
            MotionState::Idle
        }
    }

    pub fn is_moving(&self) -> bool {
        self.target.moving
    }

    pub fn destination(&self) -> Vec3 {
        self.target.destination
    }

    pub fn set_destination(&mut self, destination: Vec3) {
        self.target = MotionTarget {
            destination,
            moving: true,
        };
    }

    /// Go idle if `position` is within [`STOP_DISTANCE`] of the destination.
    /// Returns true on the Moving to Idle transition.
    pub fn arrive_if_close(&mut self, position: Vec3) -> bool {
        if self.target.moving && planar_distance(position, self.target.destination) < STOP_DISTANCE
        {
            self.target.moving = false;
            return true;
        }
        false
    }

    /// One self-steering frame: turn toward the destination and walk at
    /// `move_speed`, never past it.
    pub fn step(&mut self, transform: &mut WorldTransform, dt: f32) -> StepOutcome {
        if !self.target.moving {
            return StepOutcome::Idle;
        }
        if self.arrive_if_close(transform.translation) {
            return StepOutcome::Arrived;
        }

        let offset = planar(self.target.destination - transform.translation);
        let distance = offset.length();
        let direction = offset.normalize_or_zero();

        if let Some(look) = look_rotation(direction) {
            transform.rotation = slerp(
                transform.rotation,
                look,
                self.config.rotation_speed * dt,
            );
        }

        let travel = (self.config.move_speed * dt).min(distance);
        transform.translation += direction * travel;

        if self.arrive_if_close(transform.translation) {
            StepOutcome::Arrived
        } else {
            StepOutcome::Moved
        }
    }
}
