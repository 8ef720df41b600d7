//! Engine systems.
//!
//! Submodules overview
//! - [`cameracontroller`] – drive the active camera from the camera rig
//! - [`clicktomove`] – clicks to destinations, steering, animation flag
//! - [`gameconfig`] – push configuration changes into the running game
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`navagent`] – advance navigation agents
//! - [`render`] – draw the scene and debug overlay using raylib
//! - [`time`] – update simulation time and delta

pub mod cameracontroller;
pub mod clicktomove;
pub mod gameconfig;
pub mod input;
pub mod navagent;
pub mod render;
pub mod time;
