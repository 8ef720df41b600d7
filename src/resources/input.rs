//! Per-frame input snapshot.
//!
//! Captures the subset of pointer and keyboard state the controllers care
//! about and exposes it to systems via the [`InputState`] resource. The
//! binary fills it from raylib once per frame
//! ([`update_input_state`](crate::systems::input::update_input_state)); tests
//! write it directly.
//!
//! Pointer coordinates are screen pixels with the origin at the top-left
//! corner and y growing downward.
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Pointer button state. Same edge semantics as [`BoolState`].
#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub button: MouseButton,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}

/// The four keys that pan the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionKeys {
    pub up: KeyboardKey,
    pub down: KeyboardKey,
    pub left: KeyboardKey,
    pub right: KeyboardKey,
}

impl Default for DirectionKeys {
    fn default() -> Self {
        Self {
            up: KeyboardKey::KEY_W,
            down: KeyboardKey::KEY_S,
            left: KeyboardKey::KEY_A,
            right: KeyboardKey::KEY_D,
        }
    }
}

/// Resource capturing the per-frame input relevant to the controllers.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub debug_toggle: BoolState,
    /// Primary pointer button (click-to-move).
    pub primary: ButtonState,
    /// Pointer position in screen pixels.
    pub pointer: Vec2,
    /// Scroll delta this frame; positive scrolls away from the user.
    pub scroll_delta: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_direction_keys(&DirectionKeys::default())
    }
}

impl InputState {
    /// Input state with custom direction key bindings.
    pub fn with_direction_keys(keys: &DirectionKeys) -> Self {
        Self {
            direction_up: BoolState::bound_to(keys.up),
            direction_down: BoolState::bound_to(keys.down),
            direction_left: BoolState::bound_to(keys.left),
            direction_right: BoolState::bound_to(keys.right),
            debug_toggle: BoolState::bound_to(KeyboardKey::KEY_F11),
            primary: ButtonState::default(),
            pointer: Vec2::ZERO,
            scroll_delta: 0.0,
        }
    }

    /// Rebind the direction keys, keeping the current pressed state.
    pub fn set_direction_keys(&mut self, keys: &DirectionKeys) {
        self.direction_up.key_binding = keys.up;
        self.direction_down.key_binding = keys.down;
        self.direction_left.key_binding = keys.left;
        self.direction_right.key_binding = keys.right;
    }
}

/// Parse a key name such as `W`, `key_w`, `Up` or `KEY_LEFT`.
///
/// Letters, digits, arrows and a few named keys are recognized; anything else
/// yields `None`.
pub fn parse_key(name: &str) -> Option<KeyboardKey> {
    let upper = name.trim().to_ascii_uppercase();
    let bare = upper.strip_prefix("KEY_").unwrap_or(&upper);
    let key = match bare {
        "A" => KeyboardKey::KEY_A,
        "B" => KeyboardKey::KEY_B,
        "C" => KeyboardKey::KEY_C,
        "D" => KeyboardKey::KEY_D,
        "E" => KeyboardKey::KEY_E,
        "F" => KeyboardKey::KEY_F,
        "G" => KeyboardKey::KEY_G,
        "H" => KeyboardKey::KEY_H,
        "I" => KeyboardKey::KEY_I,
        "J" => KeyboardKey::KEY_J,
        "K" => KeyboardKey::KEY_K,
        "L" => KeyboardKey::KEY_L,
        "M" => KeyboardKey::KEY_M,
        "N" => KeyboardKey::KEY_N,
        "O" => KeyboardKey::KEY_O,
        "P" => KeyboardKey::KEY_P,
        "Q" => KeyboardKey::KEY_Q,
        "R" => KeyboardKey::KEY_R,
        "S" => KeyboardKey::KEY_S,
        "T" => KeyboardKey::KEY_T,
        "U" => KeyboardKey::KEY_U,
        "V" => KeyboardKey::KEY_V,
        "W" => KeyboardKey::KEY_W,
        "X" => KeyboardKey::KEY_X,
        "Y" => KeyboardKey::KEY_Y,
        "Z" => KeyboardKey::KEY_Z,
        "0" | "ZERO" => KeyboardKey::KEY_ZERO,
        "1" | "ONE" => KeyboardKey::KEY_ONE,
        "2" | "TWO" => KeyboardKey::KEY_TWO,
        "3" | "THREE" => KeyboardKey::KEY_THREE,
        "4" | "FOUR" => KeyboardKey::KEY_FOUR,
        "5" | "FIVE" => KeyboardKey::KEY_FIVE,
        "6" | "SIX" => KeyboardKey::KEY_SIX,
        "7" | "SEVEN" => KeyboardKey::KEY_SEVEN,
        "8" | "EIGHT" => KeyboardKey::KEY_EIGHT,
        "9" | "NINE" => KeyboardKey::KEY_NINE,
        "UP" => KeyboardKey::KEY_UP,
        "DOWN" => KeyboardKey::KEY_DOWN,
        "LEFT" => KeyboardKey::KEY_LEFT,
        "RIGHT" => KeyboardKey::KEY_RIGHT,
        "SPACE" => KeyboardKey::KEY_SPACE,
        _ => return None,
    };
    Some(key)
}

/// Config-file name of a key, the inverse of [`parse_key`].
pub fn key_name(key: KeyboardKey) -> String {
    let debug = format!("{:?}", key);
    debug
        .strip_prefix("KEY_")
        .map(str::to_string)
        .unwrap_or(debug)
}
