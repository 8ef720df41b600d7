//! Click-to-move systems.
//!
//! Run in this order each frame (see [`add_click_to_move_systems`]):
//!
//! 1. [`initialize_click_to_move`] seeds newly added controllers.
//! 2. [`click_to_move_input`] turns a primary click into a destination.
//! 3. [`nav_agent_system`] moves delegated entities.
//! 4. [`click_to_move_steering`] moves self-steering entities and detects
//!    arrival for everyone.
//! 5. [`click_to_move_animation`] writes the `IsMoving` animator flag.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animator::{Animator, IS_MOVING};
use crate::components::clicktomove::{
    ClickToMove, MOVING_SPEED_THRESHOLD, RAYCAST_MAX_DISTANCE, StepOutcome,
};
use crate::components::destinationmarker::DestinationMarker;
use crate::components::groundsurface::{GroundSurface, raycast_ground};
use crate::components::navagent::NavAgent;
use crate::components::worldtransform::WorldTransform;
use crate::events::motion::{DestinationReachedEvent, DestinationSetEvent};
use crate::resources::camera3d::Camera3DRes;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::navagent::nav_agent_system;

/// Add all click-to-move systems to `schedule`, chained in execution order.
pub fn add_click_to_move_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            initialize_click_to_move,
            click_to_move_input,
            nav_agent_system,
            click_to_move_steering,
            click_to_move_animation,
        )
            .chain(),
    );
}

/// Seed new controllers with their entity's position and tune any agent
/// on the same entity to the controller's speeds.
pub fn initialize_click_to_move(
    mut query: Query<
        (&mut ClickToMove, &WorldTransform, Option<&mut NavAgent>),
        Added<ClickToMove>,
    >,
) {
    for (mut mover, transform, agent) in query.iter_mut() {
        mover.target.destination = transform.translation;
        mover.target.moving = false;
        if let Some(mut agent) = agent {
            agent.speed = mover.config.move_speed;
            agent.angular_speed = mover.config.agent_angular_speed();
        }
    }
}

/// On a primary click, cast a ray through the pointer and send every
/// controller whose ground layers were hit to the hit point.
///
/// A miss leaves the controller untouched.
pub fn click_to_move_input(
    mut commands: Commands,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    camera: Option<Res<Camera3DRes>>,
    grounds: Query<&GroundSurface>,
    mut movers: Query<(Entity, &mut ClickToMove, Option<&mut NavAgent>)>,
    mut markers: Query<(&mut WorldTransform, &mut DestinationMarker)>,
) {
    if !input.primary.just_pressed {
        return;
    }
    let Some(camera) = camera else {
        return;
    };
    let ray = camera.screen_point_to_ray(input.pointer, *screen);

    for (entity, mut mover, agent) in movers.iter_mut() {
        let Some(hit) = raycast_ground(
            grounds.iter(),
            &ray,
            RAYCAST_MAX_DISTANCE,
            mover.ground_layers,
        ) else {
            debug!("Click missed the ground for {:?}", entity);
            continue;
        };

        mover.set_destination(hit.point);

        if let Some(marker) = mover.marker {
            if let Ok((mut marker_transform, mut marker_state)) = markers.get_mut(marker) {
                marker_transform.translation = hit.point;
                marker_state.show();
            }
        }

        if let Some(mut agent) = agent {
            agent.set_destination(hit.point);
        }

        commands.trigger(DestinationSetEvent {
            entity,
            destination: hit.point,
        });
    }
}

/// Walk self-steering controllers toward their destination and switch any
/// controller that got close enough back to idle.
pub fn click_to_move_steering(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut movers: Query<(Entity, &mut ClickToMove, &mut WorldTransform, Has<NavAgent>)>,
    mut markers: Query<&mut DestinationMarker>,
) {
    for (entity, mut mover, mut transform, delegated) in movers.iter_mut() {
        let arrived = if delegated {
            mover.arrive_if_close(transform.translation)
        } else {
            mover.step(&mut transform, time.delta) == StepOutcome::Arrived
        };

        if !arrived {
            continue;
        }
        if let Some(marker) = mover.marker {
            if let Ok(mut marker_state) = markers.get_mut(marker) {
                marker_state.hide();
            }
        }
        commands.trigger(DestinationReachedEvent { entity });
    }
}

/// Mirror each controller's motion into its animator's `IsMoving` flag.
///
/// Delegated controllers report the agent's actual speed; self-steering ones
/// report their state.
pub fn click_to_move_animation(
    mut query: Query<(&ClickToMove, Option<&NavAgent>, &mut Animator)>,
) {
    for (mover, agent, mut animator) in query.iter_mut() {
        let moving = match agent {
            Some(agent) => agent.velocity.length() > MOVING_SPEED_THRESHOLD,
            None => mover.is_moving(),
        };
        animator.set_bool(IS_MOVING, moving);
    }
}
