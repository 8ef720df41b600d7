//! Small math helpers on top of [`glam`].
//!
//! World space is left-handed: +X right, +Y up, +Z forward. Rotations map the
//! local +Z axis to an object's facing. The helpers here reproduce the
//! interpolation semantics the controllers rely on: interpolation factors are
//! clamped to `[0, 1]`, so a large frame delta snaps to the target instead of
//! overshooting it.

use glam::{EulerRot, Mat3, Quat, Vec2, Vec3};

/// Rate constant for the camera's exponential-decay smoothing.
pub const SMOOTHING_RATE: f32 = 5.0;

/// Interpolation factor for one frame of smoothing: `min(1, rate * dt)`.
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// Scalar lerp with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Vector lerp with `t` clamped to `[0, 1]`.
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a.lerp(b, t.clamp(0.0, 1.0))
}

/// Spherical interpolation with `t` clamped to `[0, 1]`.
pub fn slerp(from: Quat, to: Quat, t: f32) -> Quat {
    from.slerp(to, t.clamp(0.0, 1.0)).normalize()
}

/// Drop the vertical component.
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance between two points ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(b.x - a.x, b.z - a.z).length()
}

/// Rotation about the vertical axis, in radians.
///
/// Rotations are composed yaw-pitch-roll (Y, then X, then Z), so the first
/// euler angle is the yaw regardless of how far the rotation is tilted.
pub fn yaw_of(rotation: Quat) -> f32 {
    rotation.to_euler(EulerRot::YXZ).0
}

/// Build a rotation from yaw and pitch in degrees (pitch positive = look down).
pub fn rotation_from_degrees(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}

/// Rotation whose +Z axis points along `direction` with +Y as the up hint.
///
/// Returns `None` for a zero direction or one parallel to the up axis, where
/// no facing is defined.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let right = Vec3::Y.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Rotate `from` toward `to` by at most `max_radians`.
pub fn rotate_towards(from: Quat, to: Quat, max_radians: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= f32::EPSILON {
        return to;
    }
    let t = (max_radians / angle).clamp(0.0, 1.0);
    from.slerp(to, t).normalize()
}
