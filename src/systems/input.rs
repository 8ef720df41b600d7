//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Pressing the debug key triggers a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, ButtonState, InputState};

/// Scroll-axis units per mouse wheel notch.
///
/// raylib reports whole notches; the camera rig's zoom speed is tuned for a
/// scroll axis that moves a tenth of a unit per notch.
pub const SCROLL_PER_NOTCH: f32 = 0.1;

/// Poll raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll_key = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
        state.just_released = rl.is_key_released(key);
    };
    poll_key(&mut input.direction_up);
    poll_key(&mut input.direction_down);
    poll_key(&mut input.direction_left);
    poll_key(&mut input.direction_right);
    poll_key(&mut input.debug_toggle);

    let poll_button = |state: &mut ButtonState| {
        let button: MouseButton = state.button;
        state.active = rl.is_mouse_button_down(button);
        state.just_pressed = rl.is_mouse_button_pressed(button);
        state.just_released = rl.is_mouse_button_released(button);
    };
    poll_button(&mut input.primary);

    let mouse = rl.get_mouse_position();
    input.pointer = Vec2::new(mouse.x, mouse.y);
    input.scroll_delta = rl.get_mouse_wheel_move() * SCROLL_PER_NOTCH;

    if input.debug_toggle.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
