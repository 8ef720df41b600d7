//! Click destination marker.
//!
//! A marker is an ordinary entity with a [`WorldTransform`] and a
//! [`DestinationMarker`]. A click-to-move controller that owns one moves it
//! to each new destination and shows it until the destination is reached.
//!
//! [`WorldTransform`]: super::worldtransform::WorldTransform

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct DestinationMarker {
    pub visible: bool,
}

impl DestinationMarker {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
