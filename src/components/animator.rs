//! Named animation parameters.
//!
//! [`Animator`] is the hand-off point to whatever plays animations: gameplay
//! systems write named parameters, the animation backend reads them. Only
//! boolean parameters are needed by the controllers in this crate.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Parameter written by the click-to-move controller.
pub const IS_MOVING: &str = "IsMoving";

#[derive(Debug, Clone, Component, Default)]
pub struct Animator {
    bools: FxHashMap<String, bool>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a boolean parameter with an initial value.
    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.bools.insert(name.into(), value);
        self
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        match self.bools.get_mut(name) {
            Some(current) => *current = value,
            None => {
                self.bools.insert(name.to_string(), value);
            }
        }
    }

    /// Current value; unset parameters read as `false`.
    pub fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }
}
