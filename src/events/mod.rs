//! Event types and observers.
//!
//! Submodules:
//! - [`motion`] – click-to-move destination set / reached notifications
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod motion;
pub mod switchdebug;
