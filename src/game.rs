//! Scene setup.
//!
//! Builds the demo scene from a [`GameConfig`]: the active camera and its rig,
//! a walkable ground, and one click-to-move character with a destination
//! marker and an animator. Works on a bare `World`, so integration tests can
//! use the same scene the binary runs.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::info;

use crate::components::animator::{Animator, IS_MOVING};
use crate::components::clicktomove::ClickToMove;
use crate::components::destinationmarker::DestinationMarker;
use crate::components::groundsurface::{GroundSurface, LayerMask};
use crate::components::navagent::NavAgent;
use crate::components::worldtransform::WorldTransform;
use crate::math::rotation_from_degrees;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::camerarig::CameraRig;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

/// Layer the demo ground lives on.
pub const GROUND_LAYER: LayerMask = LayerMask::layer(0);
/// Fallback distance from the camera to the origin when it looks almost level.
const LEVEL_CAMERA_DISTANCE: f32 = 40.0;

/// Entities created by [`setup`].
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub ground: Entity,
    pub character: Entity,
    pub marker: Entity,
}

/// Options that change how the demo character moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    /// Attach a [`NavAgent`] so movement is delegated instead of self-steered.
    pub use_nav_agent: bool,
}

/// Camera aimed at the world origin from the configured pitch and yaw.
///
/// The camera sits high enough that its height equals the starting zoom,
/// so a perspective camera does not jump on the first frame.
pub fn initial_camera(config: &GameConfig) -> Camera3DRes {
    let rotation = rotation_from_degrees(config.camera_yaw, config.camera_pitch);
    let forward = rotation * Vec3::Z;
    let zoom = config
        .orthographic_size
        .clamp(config.camera.min_zoom, config.camera.max_zoom);
    let distance = if forward.y < -0.1 {
        zoom / -forward.y
    } else {
        LEVEL_CAMERA_DISTANCE
    };
    Camera3DRes {
        position: -forward * distance,
        rotation,
        projection: config.projection,
        orthographic_size: config.orthographic_size,
        fov_y: config.field_of_view,
    }
}

/// Insert camera resources and spawn the demo entities.
pub fn setup(world: &mut World, config: &GameConfig, options: SceneOptions) -> Scene {
    let camera = initial_camera(config);
    world.insert_resource(CameraRig::from_camera(config.camera.clone(), &camera));
    world.insert_resource(camera);
    world.insert_resource(InputState::with_direction_keys(&config.camera.keys));

    let bounds = config.camera.bounds;
    let half_extent = (bounds.max_x - bounds.min_x)
        .max(bounds.max_z - bounds.min_z)
        .max(1.0)
        * 0.5;
    let ground_center = Vec3::new(
        (bounds.min_x + bounds.max_x) * 0.5,
        0.0,
        (bounds.min_z + bounds.max_z) * 0.5,
    );
    let ground = world
        .spawn(GroundSurface::square(ground_center, half_extent, GROUND_LAYER))
        .id();

    let marker = world
        .spawn((WorldTransform::default(), DestinationMarker::default()))
        .id();

    let mover = ClickToMove::new(config.character)
        .with_marker(marker)
        .with_ground_layers(GROUND_LAYER);
    let mut character = world.spawn((
        WorldTransform::default(),
        mover,
        Animator::new().with_bool(IS_MOVING, false),
    ));
    if options.use_nav_agent {
        character.insert(NavAgent::new());
    }
    let character = character.id();

    info!(
        "Scene ready: {} camera, ground {:.0}x{:.0}, {} character",
        config.projection.name(),
        half_extent * 2.0,
        half_extent * 2.0,
        if options.use_nav_agent {
            "agent-driven"
        } else {
            "self-steering"
        }
    );

    Scene {
        ground,
        character,
        marker,
    }
}
