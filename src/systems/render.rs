//! Debug visualization.
//!
//! Draws the scene through the active [`Camera3DRes`]: ground surfaces, a
//! reference grid, the camera rig bounds, click-to-move characters with their
//! facing, and visible destination markers. With [`DebugMode`] present a text
//! overlay shows camera and controller state.
//!
//! World space is left-handed (+Z forward) while raylib is right-handed, so
//! every point is mirrored on z on its way to raylib.
use bevy_ecs::prelude::*;
use glam::Vec3;
use raylib::prelude::*;

use crate::components::clicktomove::ClickToMove;
use crate::components::destinationmarker::DestinationMarker;
use crate::components::groundsurface::GroundSurface;
use crate::components::worldtransform::WorldTransform;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::camerarig::CameraRig;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

const GROUND_COLOR: Color = Color::new(110, 150, 90, 255);
const CHARACTER_COLOR: Color = Color::new(60, 90, 200, 255);
const MARKER_COLOR: Color = Color::new(230, 200, 40, 255);

fn to_raylib(v: Vec3) -> Vector3 {
    Vector3 {
        x: v.x,
        y: v.y,
        z: -v.z,
    }
}

fn raylib_camera(camera: &Camera3DRes) -> Camera3D {
    let position = to_raylib(camera.position);
    let target = to_raylib(camera.position + camera.forward());
    let up = to_raylib(camera.up());
    if camera.is_orthographic() {
        // raylib's orthographic fovy is the full vertical extent.
        Camera3D::orthographic(position, target, up, camera.orthographic_size * 2.0)
    } else {
        Camera3D::perspective(position, target, up, camera.fov_y)
    }
}

/// Draw the frame.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<Camera3DRes>,
    rig: Option<Res<CameraRig>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    debug: Option<Res<DebugMode>>,
    grounds: Query<&GroundSurface>,
    movers: Query<(&ClickToMove, &WorldTransform)>,
    markers: Query<(&DestinationMarker, &WorldTransform)>,
) {
    let rl_camera = raylib_camera(&camera);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::SKYBLUE);

    {
        let mut d3 = d.begin_mode3D(rl_camera);

        for ground in grounds.iter() {
            let size = ground.size();
            d3.draw_cube(
                to_raylib(ground.center() - Vec3::new(0.0, 0.05, 0.0)),
                size.x,
                0.1,
                size.y,
                GROUND_COLOR,
            );
        }
        d3.draw_grid(100, 1.0);

        if let Some(rig) = rig.as_ref() {
            if rig.config.use_boundaries {
                let b = rig.config.bounds;
                let corners = [
                    Vec3::new(b.min_x, 0.02, b.min_z),
                    Vec3::new(b.max_x, 0.02, b.min_z),
                    Vec3::new(b.max_x, 0.02, b.max_z),
                    Vec3::new(b.min_x, 0.02, b.max_z),
                ];
                for i in 0..corners.len() {
                    let next = corners[(i + 1) % corners.len()];
                    d3.draw_line_3D(to_raylib(corners[i]), to_raylib(next), Color::RED);
                }
            }
        }

        for (marker, transform) in markers.iter() {
            if marker.visible {
                d3.draw_sphere(to_raylib(transform.translation), 0.25, MARKER_COLOR);
            }
        }

        for (mover, transform) in movers.iter() {
            let body = transform.translation + Vec3::new(0.0, 0.5, 0.0);
            d3.draw_cube(to_raylib(body), 0.6, 1.0, 0.6, CHARACTER_COLOR);
            d3.draw_cube_wires(to_raylib(body), 0.6, 1.0, 0.6, Color::DARKBLUE);
            let nose = body + transform.forward() * 0.45 + Vec3::new(0.0, 0.25, 0.0);
            d3.draw_cube(to_raylib(nose), 0.2, 0.2, 0.2, Color::ORANGE);
            if mover.is_moving() {
                d3.draw_line_3D(
                    to_raylib(transform.translation),
                    to_raylib(mover.destination()),
                    MARKER_COLOR,
                );
            }
        }
    }

    if debug.is_some() {
        d.draw_fps(10, 10);
        d.draw_text(
            &format!("Frame {} t={:.1}s", time.frame_count, time.elapsed),
            100,
            14,
            10,
            Color::BLACK,
        );
        let cam_text = format!(
            "Camera pos: ({:.1}, {:.1}, {:.1}) size: {:.2} yaw: {:.1}",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.orthographic_size,
            camera.yaw().to_degrees()
        );
        d.draw_text(&cam_text, 10, 34, 10, Color::BLACK);
        if let Some(rig) = rig.as_ref() {
            let rig_text = format!(
                "Rig target: ({:.1}, {:.1}, {:.1}) zoom: {:.2}",
                rig.target_position.x, rig.target_position.y, rig.target_position.z, rig.target_zoom
            );
            d.draw_text(&rig_text, 10, 50, 10, Color::BLACK);
        }
        let pointer_text = format!(
            "Pointer: ({:.0}, {:.0}) scroll: {:.2}",
            input.pointer.x, input.pointer.y, input.scroll_delta
        );
        d.draw_text(&pointer_text, 10, 66, 10, Color::BLACK);
        for (i, (mover, transform)) in movers.iter().enumerate() {
            let text = format!(
                "Mover {}: {:?} at ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                i,
                mover.state(),
                transform.translation.x,
                transform.translation.z,
                mover.destination().x,
                mover.destination().z
            );
            d.draw_text(&text, 10, 82 + 16 * i as i32, 10, Color::BLACK);
        }
    } else {
        d.draw_text(
            "Click to move | WASD / screen edges to pan | wheel to zoom | F11 debug",
            10,
            10,
            10,
            Color::BLACK,
        );
    }
}
