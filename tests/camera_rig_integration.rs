//! Camera rig integration tests: input resources in, active camera out.

use bevy_ecs::prelude::*;
use glam::{Vec2, Vec3};
use raylib::prelude::KeyboardKey;

use rtsrig::components::clicktomove::{ClickToMove, ClickToMoveConfig};
use rtsrig::math::rotation_from_degrees;
use rtsrig::resources::camera3d::{Camera3DRes, ProjectionMode};
use rtsrig::resources::camerarig::{CameraRig, CameraRigConfig};
use rtsrig::resources::gameconfig::GameConfig;
use rtsrig::resources::input::InputState;
use rtsrig::resources::screensize::ScreenSize;
use rtsrig::resources::worldtime::WorldTime;
use rtsrig::systems::cameracontroller::camera_rig_controller;
use rtsrig::systems::gameconfig::apply_gameconfig_changes;
use rtsrig::systems::time::update_world_time;

const EPSILON: f32 = 1e-3;
const DT: f32 = 0.1;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(config: CameraRigConfig, camera: Camera3DRes) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    let mut input = InputState::default();
    input.pointer = Vec2::new(400.0, 300.0);
    world.insert_resource(input);
    world.insert_resource(CameraRig::from_camera(config, &camera));
    world.insert_resource(camera);
    world
}

fn ortho_camera() -> Camera3DRes {
    Camera3DRes {
        position: Vec3::new(0.0, 20.0, 0.0),
        rotation: rotation_from_degrees(0.0, 60.0),
        projection: ProjectionMode::Orthographic,
        orthographic_size: 20.0,
        fov_y: 45.0,
    }
}

fn rig_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_rig_controller);
    schedule
}

fn run_ticks(world: &mut World, schedule: &mut Schedule, ticks: usize) {
    for _ in 0..ticks {
        update_world_time(world, DT);
        schedule.run(world);
    }
}

fn input_mut(world: &mut World) -> Mut<'_, InputState> {
    world.resource_mut::<InputState>()
}

#[test]
fn holding_right_for_one_second_moves_target_fifteen_units() {
    let config = CameraRigConfig {
        enable_edge_scrolling: false,
        ..CameraRigConfig::default()
    };
    let mut world = make_world(config, ortho_camera());
    let mut schedule = rig_schedule();
    input_mut(&mut world).direction_right.active = true;

    run_ticks(&mut world, &mut schedule, 10);

    let rig = world.resource::<CameraRig>();
    assert!(approx_eq(rig.target_position.x, 15.0));
    assert!(approx_eq(rig.target_position.z, 0.0));
    assert!(approx_eq(rig.target_position.y, 20.0));

    // The camera trails the target but heads toward it.
    let camera = world.resource::<Camera3DRes>();
    assert!(camera.position.x > 0.0 && camera.position.x < 15.0);
}

#[test]
fn diagonal_keys_pan_at_axial_speed() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();
    {
        let mut input = input_mut(&mut world);
        input.direction_up.active = true;
        input.direction_right.active = true;
    }

    run_ticks(&mut world, &mut schedule, 1);

    let rig = world.resource::<CameraRig>();
    let planar = Vec2::new(rig.target_position.x, rig.target_position.z);
    assert!(approx_eq(planar.length(), 1.5));
    assert!(approx_eq(planar.x, planar.y));
}

#[test]
fn centered_pointer_without_keys_keeps_camera_still() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();

    run_ticks(&mut world, &mut schedule, 5);

    let rig = world.resource::<CameraRig>();
    let camera = world.resource::<Camera3DRes>();
    assert_eq!(rig.target_position, Vec3::new(0.0, 20.0, 0.0));
    assert!((camera.position - Vec3::new(0.0, 20.0, 0.0)).length() < EPSILON);
}

#[test]
fn edge_scrolling_pans_toward_the_touched_edge() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();
    // Bottom-left corner: left and backward.
    input_mut(&mut world).pointer = Vec2::new(1.0, 599.0);

    run_ticks(&mut world, &mut schedule, 1);

    let rig = world.resource::<CameraRig>();
    assert!(rig.target_position.x < 0.0);
    assert!(rig.target_position.z < 0.0);
    assert!(approx_eq(rig.target_position.x, rig.target_position.z));
}

#[test]
fn pan_direction_follows_camera_yaw() {
    let camera = Camera3DRes {
        rotation: rotation_from_degrees(90.0, 60.0),
        ..ortho_camera()
    };
    let mut world = make_world(CameraRigConfig::default(), camera);
    let mut schedule = rig_schedule();
    input_mut(&mut world).direction_up.active = true;

    run_ticks(&mut world, &mut schedule, 1);

    // Looking toward +X, "up" pans along +X.
    let rig = world.resource::<CameraRig>();
    assert!(approx_eq(rig.target_position.x, 1.5));
    assert!(approx_eq(rig.target_position.z, 0.0));
}

#[test]
fn boundaries_hold_the_target_and_the_camera() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();
    {
        let mut input = input_mut(&mut world);
        input.direction_right.active = true;
        input.direction_down.active = true;
    }

    run_ticks(&mut world, &mut schedule, 200);

    let rig = world.resource::<CameraRig>();
    assert_eq!(rig.target_position.x, 50.0);
    assert_eq!(rig.target_position.z, -50.0);
    assert!(rig.config.bounds.contains(rig.target_position));
    let camera = world.resource::<Camera3DRes>();
    assert!(rig.config.bounds.contains(camera.position));
    assert!(approx_eq(camera.position.x, 50.0));
}

#[test]
fn unbounded_rig_keeps_going() {
    let config = CameraRigConfig {
        use_boundaries: false,
        ..CameraRigConfig::default()
    };
    let mut world = make_world(config, ortho_camera());
    let mut schedule = rig_schedule();
    input_mut(&mut world).direction_left.active = true;

    run_ticks(&mut world, &mut schedule, 50);

    assert!(approx_eq(world.resource::<CameraRig>().target_position.x, -75.0));
}

#[test]
fn scrolling_stays_within_zoom_range() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();

    for delta in [0.1, 0.5, 3.0, -0.2, -10.0, 0.05, 7.5, -0.3] {
        input_mut(&mut world).scroll_delta = delta;
        run_ticks(&mut world, &mut schedule, 1);
        let zoom = world.resource::<CameraRig>().target_zoom;
        assert!((10.0..=50.0).contains(&zoom), "zoom {zoom} after delta {delta}");
    }
}

#[test]
fn orthographic_zoom_eases_toward_target() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mut schedule = rig_schedule();
    // Scroll toward the user: zoom out by 5.
    input_mut(&mut world).scroll_delta = -0.5;
    run_ticks(&mut world, &mut schedule, 1);
    input_mut(&mut world).scroll_delta = 0.0;

    assert!(approx_eq(world.resource::<CameraRig>().target_zoom, 25.0));
    assert!(approx_eq(
        world.resource::<Camera3DRes>().orthographic_size,
        22.5
    ));

    run_ticks(&mut world, &mut schedule, 40);
    assert!(approx_eq(
        world.resource::<Camera3DRes>().orthographic_size,
        25.0
    ));
}

#[test]
fn perspective_zoom_moves_camera_height() {
    let camera = Camera3DRes {
        projection: ProjectionMode::Perspective,
        ..ortho_camera()
    };
    let mut world = make_world(CameraRigConfig::default(), camera);
    let mut schedule = rig_schedule();
    input_mut(&mut world).scroll_delta = -1.0;

    run_ticks(&mut world, &mut schedule, 1);

    let camera = world.resource::<Camera3DRes>();
    // Height is pulled halfway toward the new zoom target of 30.
    assert!(approx_eq(camera.position.y, 25.0));
    assert!(approx_eq(camera.orthographic_size, 20.0));
}

#[test]
fn missing_rig_leaves_camera_alone() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    world.remove_resource::<CameraRig>();
    let mut schedule = rig_schedule();
    input_mut(&mut world).direction_right.active = true;

    run_ticks(&mut world, &mut schedule, 3);

    assert_eq!(
        world.resource::<Camera3DRes>().position,
        Vec3::new(0.0, 20.0, 0.0)
    );
}

#[test]
fn config_changes_reach_rig_input_and_movers() {
    let mut world = make_world(CameraRigConfig::default(), ortho_camera());
    let mover = world
        .spawn(ClickToMove::new(ClickToMoveConfig::default()))
        .id();

    let mut config = GameConfig::new();
    config.camera.edge_scroll_speed = 30.0;
    config.camera.max_zoom = 15.0;
    config.camera.keys.right = KeyboardKey::KEY_RIGHT;
    config.character.move_speed = 9.0;
    world.insert_resource(config);

    let mut schedule = Schedule::default();
    schedule.add_systems((apply_gameconfig_changes, camera_rig_controller).chain());
    input_mut(&mut world).direction_right.active = true;
    update_world_time(&mut world, DT);
    schedule.run(&mut world);

    let rig = world.resource::<CameraRig>();
    assert_eq!(rig.config.edge_scroll_speed, 30.0);
    assert!(rig.target_zoom <= 15.0);
    assert!(approx_eq(rig.target_position.x, 3.0));
    assert_eq!(
        world.resource::<InputState>().direction_right.key_binding,
        KeyboardKey::KEY_RIGHT
    );
    assert_eq!(
        world.get::<ClickToMove>(mover).unwrap().config.move_speed,
        9.0
    );
}
