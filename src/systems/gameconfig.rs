//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] and pushes its values into the running game when
//! it is inserted or modified: controller tunables, key bindings, and (when a
//! window exists) frame pacing.

use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

use crate::components::clicktomove::ClickToMove;
use crate::resources::camerarig::CameraRig;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

/// System that applies game configuration changes.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `CameraRig` (optional, mutable) - receives the `[camera]` tunables
/// - `InputState` (mutable) - receives the camera key bindings
/// - `RaylibHandle` (optional, non-send, mutable) - frame pacing and vsync
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    rig: Option<ResMut<CameraRig>>,
    mut input: ResMut<InputState>,
    mut movers: Query<&mut ClickToMove>,
    rl: Option<NonSendMut<raylib::RaylibHandle>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    if let Some(mut rig) = rig {
        rig.config = config.camera.clone();
        rig.target_zoom = rig
            .target_zoom
            .clamp(config.camera.min_zoom, config.camera.max_zoom);
        rig.clamp_target();
    }
    input.set_direction_keys(&config.camera.keys);

    for mut mover in movers.iter_mut() {
        mover.config = config.character;
    }

    if let Some(mut rl) = rl {
        // Apply vsync setting
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }
        rl.set_target_fps(config.target_fps);
    }

    info!("GameConfig changes applied.");
}
