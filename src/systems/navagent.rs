//! Navigation agent stepping.
use bevy_ecs::prelude::*;

use crate::components::navagent::NavAgent;
use crate::components::worldtransform::WorldTransform;
use crate::resources::worldtime::WorldTime;

/// Advance every navigation agent by the frame delta.
pub fn nav_agent_system(
    mut query: Query<(&mut NavAgent, &mut WorldTransform)>,
    time: Res<WorldTime>,
) {
    for (mut agent, mut transform) in query.iter_mut() {
        agent.step(&mut transform, time.delta);
    }
}
