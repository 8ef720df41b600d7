//! ECS resources made available to systems.
//!
//! Overview
//! - `camera3d` – the active camera: pose, projection, screen-to-world rays
//! - `camerarig` – edge/keyboard scrolling rig that drives the active camera
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed configuration for window and controllers
//! - `input` – per-frame pointer and key state
//! - `screensize` – current drawable size in pixels
//! - `worldtime` – simulation time and delta
pub mod camera3d;
pub mod camerarig;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod worldtime;
