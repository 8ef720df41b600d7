//! Debug overlay toggle.
//!
//! While this resource is present the renderer draws camera and controller
//! diagnostics on top of the scene.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
