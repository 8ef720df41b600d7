//! Camera rig system.
//!
//! Thin wrapper that feeds the frame's input into
//! [`CameraRig::tick`](crate::resources::camerarig::CameraRig::tick) and
//! lets it drive the active camera.
use bevy_ecs::prelude::*;

use crate::resources::camera3d::Camera3DRes;
use crate::resources::camerarig::CameraRig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Pan, zoom, clamp and smooth the active camera. Does nothing when no rig
/// or camera is present.
pub fn camera_rig_controller(
    rig: Option<ResMut<CameraRig>>,
    camera: Option<ResMut<Camera3DRes>>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let (Some(mut rig), Some(mut camera)) = (rig, camera) else {
        return;
    };
    rig.tick(&mut camera, &input, *screen, time.delta);
}
