//! Edge/keyboard scrolling camera rig.
//!
//! The rig keeps a persistent *target* position and zoom. Every tick it adds
//! the frame's input to those targets, clamps them, and then eases the active
//! [`Camera3DRes`] toward them. Input never moves the camera directly, so a
//! single keypress keeps gliding for a few frames after release.
//!
//! Orthographic cameras zoom through their orthographic size. Perspective
//! cameras have no optical zoom here: the camera height is eased toward the
//! target zoom value instead.

use bevy_ecs::prelude::Resource;
use glam::{Quat, Vec2, Vec3};

use crate::math::{SMOOTHING_RATE, lerp, lerp_vec3, smoothing_factor};
use crate::resources::camera3d::Camera3DRes;
use crate::resources::input::{DirectionKeys, InputState};
use crate::resources::screensize::ScreenSize;

/// Axis-aligned rectangle on the ground plane that the rig target may not leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for RigBounds {
    fn default() -> Self {
        Self {
            min_x: -50.0,
            max_x: 50.0,
            min_z: -50.0,
            max_z: 50.0,
        }
    }
}

impl RigBounds {
    /// Clamp the horizontal axes of `position`; height is untouched.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_z..=self.max_z).contains(&position.z)
    }
}

/// Author-time tunables for the camera rig.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRigConfig {
    /// Pan speed in world units per second, for both edge and key scrolling.
    pub edge_scroll_speed: f32,
    /// Width in pixels of the screen border that triggers edge scrolling.
    pub scroll_area_thickness: f32,
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub use_boundaries: bool,
    pub bounds: RigBounds,
    pub enable_edge_scrolling: bool,
    pub enable_keyboard_controls: bool,
    pub keys: DirectionKeys,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            edge_scroll_speed: 15.0,
            scroll_area_thickness: 15.0,
            zoom_speed: 10.0,
            min_zoom: 10.0,
            max_zoom: 50.0,
            use_boundaries: true,
            bounds: RigBounds::default(),
            enable_edge_scrolling: true,
            enable_keyboard_controls: true,
            keys: DirectionKeys::default(),
        }
    }
}

impl CameraRigConfig {
    /// Check the invariants the rig relies on. Returns a description of the
    /// first violated one.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.edge_scroll_speed >= 0.0) {
            return Err(format!(
                "edge_scroll_speed must be >= 0 (got {})",
                self.edge_scroll_speed
            ));
        }
        if !(self.scroll_area_thickness >= 0.0) {
            return Err(format!(
                "scroll_area_thickness must be >= 0 (got {})",
                self.scroll_area_thickness
            ));
        }
        if !(self.zoom_speed >= 0.0) {
            return Err(format!("zoom_speed must be >= 0 (got {})", self.zoom_speed));
        }
        if !(self.min_zoom > 0.0) {
            return Err(format!("min_zoom must be > 0 (got {})", self.min_zoom));
        }
        if !(self.min_zoom <= self.max_zoom) {
            return Err(format!(
                "min_zoom ({}) must not exceed max_zoom ({})",
                self.min_zoom, self.max_zoom
            ));
        }
        let b = &self.bounds;
        if !(b.min_x <= b.max_x) {
            return Err(format!("min_x ({}) must not exceed max_x ({})", b.min_x, b.max_x));
        }
        if !(b.min_z <= b.max_z) {
            return Err(format!("min_z ({}) must not exceed max_z ({})", b.min_z, b.max_z));
        }
        Ok(())
    }
}

/// Camera rig state: configuration plus the running targets.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub config: CameraRigConfig,
    pub target_position: Vec3,
    pub target_zoom: f32,
}

impl CameraRig {
    /// Start the rig at the camera's current pose and orthographic size.
    pub fn from_camera(config: CameraRigConfig, camera: &Camera3DRes) -> Self {
        let target_zoom = camera
            .orthographic_size
            .clamp(config.min_zoom, config.max_zoom);
        Self {
            target_position: camera.position,
            target_zoom,
            config,
        }
    }

    /// Raw (unnormalized) planar scroll direction for this frame.
    ///
    /// Each edge and each key contributes one unit on its axis; opposite
    /// contributions cancel.
    pub fn movement_direction(&self, input: &InputState, screen: ScreenSize) -> Vec3 {
        let mut direction = Vec3::ZERO;

        if self.config.enable_edge_scrolling {
            let thickness = self.config.scroll_area_thickness;
            let Vec2 { x, y } = input.pointer;
            let size = screen.as_vec2();
            if x < thickness {
                direction.x -= 1.0;
            }
            if x > size.x - thickness {
                direction.x += 1.0;
            }
            // Screen y grows downward: the bottom edge pans backward.
            if y > size.y - thickness {
                direction.z -= 1.0;
            }
            if y < thickness {
                direction.z += 1.0;
            }
        }

        if self.config.enable_keyboard_controls {
            if input.direction_up.active {
                direction.z += 1.0;
            }
            if input.direction_down.active {
                direction.z -= 1.0;
            }
            if input.direction_left.active {
                direction.x -= 1.0;
            }
            if input.direction_right.active {
                direction.x += 1.0;
            }
        }

        direction
    }

    /// Accumulate this frame's pan into the target position.
    pub fn apply_movement(&mut self, direction: Vec3, yaw: f32, dt: f32) {
        if direction == Vec3::ZERO {
            return;
        }
        let step = direction.normalize() * self.config.edge_scroll_speed * dt;
        self.target_position += Quat::from_rotation_y(yaw) * step;
    }

    /// Accumulate a scroll delta into the target zoom.
    pub fn apply_zoom(&mut self, scroll_delta: f32) {
        if scroll_delta == 0.0 {
            return;
        }
        self.target_zoom = (self.target_zoom - scroll_delta * self.config.zoom_speed)
            .clamp(self.config.min_zoom, self.config.max_zoom);
    }

    /// Keep the target inside the configured bounds, when enabled.
    pub fn clamp_target(&mut self) {
        if self.config.use_boundaries {
            self.target_position = self.config.bounds.clamp(self.target_position);
        }
    }

    /// Ease the camera toward the current targets.
    pub fn smooth_camera(&self, camera: &mut Camera3DRes, dt: f32) {
        let t = smoothing_factor(SMOOTHING_RATE, dt);
        camera.position = lerp_vec3(camera.position, self.target_position, t);
        if camera.is_orthographic() {
            camera.orthographic_size = lerp(camera.orthographic_size, self.target_zoom, t);
        } else {
            camera.position.y = lerp(camera.position.y, self.target_zoom, t);
        }
    }

    /// One full frame: input, zoom, clamp, smoothing.
    pub fn tick(
        &mut self,
        camera: &mut Camera3DRes,
        input: &InputState,
        screen: ScreenSize,
        dt: f32,
    ) {
        let direction = self.movement_direction(input, screen);
        self.apply_movement(direction, camera.yaw(), dt);
        self.apply_zoom(input.scroll_delta);
        self.clamp_target();
        self.smooth_camera(camera, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::camera3d::ProjectionMode;

    const SCREEN: ScreenSize = ScreenSize { w: 800, h: 600 };
    const EPSILON: f32 = 1e-4;

    fn centered_input() -> InputState {
        let mut input = InputState::default();
        input.pointer = Vec2::new(400.0, 300.0);
        input
    }

    fn rig() -> CameraRig {
        CameraRig::from_camera(CameraRigConfig::default(), &Camera3DRes {
            orthographic_size: 20.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_pointer_inside_margin_gives_no_direction() {
        let rig = rig();
        let mut input = centered_input();
        for (x, y) in [(15.0, 15.0), (785.0, 585.0), (400.0, 15.0), (15.0, 300.0)] {
            input.pointer = Vec2::new(x, y);
            assert_eq!(rig.movement_direction(&input, SCREEN), Vec3::ZERO);
        }
    }

    #[test]
    fn test_each_edge_pans_its_axis() {
        let rig = rig();
        let mut input = centered_input();
        let cases = [
            (Vec2::new(2.0, 300.0), Vec3::NEG_X),
            (Vec2::new(798.0, 300.0), Vec3::X),
            (Vec2::new(400.0, 598.0), Vec3::NEG_Z),
            (Vec2::new(400.0, 2.0), Vec3::Z),
            (Vec2::new(798.0, 2.0), Vec3::new(1.0, 0.0, 1.0)),
        ];
        for (pointer, expected) in cases {
            input.pointer = pointer;
            assert_eq!(rig.movement_direction(&input, SCREEN), expected);
        }
    }

    #[test]
    fn test_edge_and_key_contributions_add_up() {
        let rig = rig();
        let mut input = centered_input();
        input.pointer = Vec2::new(798.0, 300.0);
        input.direction_right.active = true;
        assert_eq!(rig.movement_direction(&input, SCREEN), Vec3::new(2.0, 0.0, 0.0));

        input.direction_left.active = true;
        assert_eq!(rig.movement_direction(&input, SCREEN), Vec3::X);
    }

    #[test]
    fn test_disabled_sources_are_ignored() {
        let mut rig = rig();
        rig.config.enable_edge_scrolling = false;
        rig.config.enable_keyboard_controls = false;
        let mut input = centered_input();
        input.pointer = Vec2::ZERO;
        input.direction_up.active = true;
        assert_eq!(rig.movement_direction(&input, SCREEN), Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_speed_matches_axial_speed() {
        let mut axial = rig();
        let mut diagonal = rig();
        axial.apply_movement(Vec3::X, 0.0, 0.1);
        diagonal.apply_movement(Vec3::new(1.0, 0.0, 1.0), 0.0, 0.1);
        assert!((axial.target_position.length() - 1.5).abs() < EPSILON);
        assert!((diagonal.target_position.length() - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_movement_follows_camera_yaw() {
        let mut rig = rig();
        rig.apply_movement(Vec3::Z, std::f32::consts::FRAC_PI_2, 1.0);
        // Facing +X, "forward" pans along +X.
        assert!((rig.target_position - Vec3::new(15.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_zoom_is_clamped_both_ways() {
        let mut rig = rig();
        rig.apply_zoom(100.0);
        assert_eq!(rig.target_zoom, 10.0);
        rig.apply_zoom(-100.0);
        assert_eq!(rig.target_zoom, 50.0);
        rig.apply_zoom(0.5);
        assert_eq!(rig.target_zoom, 45.0);
    }

    #[test]
    fn test_initial_zoom_is_clamped_into_range() {
        let rig = CameraRig::from_camera(CameraRigConfig::default(), &Camera3DRes::default());
        assert_eq!(rig.target_zoom, 10.0);
    }

    #[test]
    fn test_bounds_clamp_only_when_enabled() {
        let mut rig = rig();
        rig.target_position = Vec3::new(80.0, 7.0, -90.0);
        rig.clamp_target();
        assert_eq!(rig.target_position, Vec3::new(50.0, 7.0, -50.0));

        rig.config.use_boundaries = false;
        rig.target_position = Vec3::new(80.0, 7.0, -90.0);
        rig.clamp_target();
        assert_eq!(rig.target_position, Vec3::new(80.0, 7.0, -90.0));
    }

    #[test]
    fn test_smoothing_moves_halfway_at_a_tenth_of_a_second() {
        let mut rig = rig();
        rig.target_position = Vec3::new(10.0, 0.0, 0.0);
        rig.target_zoom = 30.0;
        let mut camera = Camera3DRes {
            orthographic_size: 20.0,
            ..Default::default()
        };
        rig.smooth_camera(&mut camera, 0.1);
        assert!((camera.position.x - 5.0).abs() < EPSILON);
        assert!((camera.orthographic_size - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_perspective_zoom_drives_height() {
        let mut rig = rig();
        rig.target_position = Vec3::new(0.0, 10.0, 0.0);
        rig.target_zoom = 30.0;
        let mut camera = Camera3DRes {
            position: Vec3::new(0.0, 10.0, 0.0),
            projection: ProjectionMode::Perspective,
            orthographic_size: 20.0,
            ..Default::default()
        };
        rig.smooth_camera(&mut camera, 0.1);
        assert!((camera.position.y - 20.0).abs() < EPSILON);
        assert_eq!(camera.orthographic_size, 20.0);
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        assert!(CameraRigConfig::default().validate().is_ok());

        let mut config = CameraRigConfig::default();
        config.min_zoom = 60.0;
        assert!(config.validate().is_err());

        let mut config = CameraRigConfig::default();
        config.bounds.min_z = 10.0;
        config.bounds.max_z = -10.0;
        assert!(config.validate().is_err());

        let mut config = CameraRigConfig::default();
        config.zoom_speed = f32::NAN;
        assert!(config.validate().is_err());
    }
}
