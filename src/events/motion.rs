//! Click-to-move motion events.
//!
//! Triggered by the click-to-move systems when a controller picks up a new
//! destination and when it reaches one. Observers can use them for sounds,
//! UI feedback or scripted reactions without polling controller state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

/// A click resolved against the ground and `entity` now heads to `destination`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DestinationSetEvent {
    pub entity: Entity,
    pub destination: Vec3,
}

/// `entity` came within stopping distance of its destination.
#[derive(Event, Debug, Clone, Copy)]
pub struct DestinationReachedEvent {
    pub entity: Entity,
}

/// Observer that logs new destinations.
pub fn log_destination_set(trigger: On<DestinationSetEvent>) {
    let event = trigger.event();
    debug!(
        "{:?} heading to ({:.2}, {:.2}, {:.2})",
        event.entity, event.destination.x, event.destination.y, event.destination.z
    );
}

/// Observer that logs arrivals.
pub fn log_destination_reached(trigger: On<DestinationReachedEvent>) {
    debug!("{:?} reached its destination", trigger.event().entity);
}
