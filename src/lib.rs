//! rtsrig library.
//!
//! A top-down camera rig and a click-to-move character controller, hosted in
//! a `bevy_ecs` world. This module exposes the components, resources, systems
//! and events for use by the demo binary, integration tests, and other hosts.

pub mod components;
pub mod events;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
