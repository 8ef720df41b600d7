//! Game configuration resource.
//!
//! Manages window, camera and character settings loaded from an INI file.
//! Provides defaults for safe startup and methods to load, validate and save
//! the configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//!
//! [camera]
//! projection = orthographic
//! orthographic_size = 20
//! field_of_view = 45
//! pitch = 60
//! yaw = 0
//! edge_scroll_speed = 15
//! scroll_area_thickness = 15
//! zoom_speed = 10
//! min_zoom = 10
//! max_zoom = 50
//! use_boundaries = true
//! min_x = -50
//! max_x = 50
//! min_z = -50
//! max_z = 50
//! enable_edge_scrolling = true
//! enable_keyboard_controls = true
//! key_up = W
//! key_down = S
//! key_left = A
//! key_right = D
//!
//! [character]
//! move_speed = 5
//! rotation_speed = 10
//! ```
//!
//! Keys missing from the file keep their current values.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::KeyboardKey;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::clicktomove::ClickToMoveConfig;
use crate::resources::camera3d::ProjectionMode;
use crate::resources::camerarig::CameraRigConfig;
use crate::resources::input::{key_name, parse_key};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_ORTHOGRAPHIC_SIZE: f32 = 20.0;
const DEFAULT_FIELD_OF_VIEW: f32 = 45.0;
const DEFAULT_CAMERA_PITCH: f32 = 60.0;
const DEFAULT_CAMERA_YAW: f32 = 0.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Largest accepted window width or height, in pixels.
pub const MAX_WINDOW_SIZE: u32 = 16384;

/// Errors raised while loading, validating or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("failed to write config file: {0}")]
    Write(#[from] std::io::Error),

    #[error("invalid value for [{section}] {key}: {message}")]
    Value {
        section: String,
        key: String,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    fn value(section: &str, key: &str, message: impl Into<String>) -> Self {
        ConfigError::Value {
            section: section.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Game configuration resource.
///
/// Stores window settings, the initial camera setup, and the tunables of
/// both controllers. When inserted or changed in the ECS world, the
/// [`apply_gameconfig_changes`] system pushes the values to the running game.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Projection of the active camera.
    pub projection: ProjectionMode,
    /// Starting orthographic size (also the rig's starting zoom).
    pub orthographic_size: f32,
    /// Vertical field of view in degrees, perspective only.
    pub field_of_view: f32,
    /// Downward tilt of the camera in degrees.
    pub camera_pitch: f32,
    /// Heading of the camera in degrees.
    pub camera_yaw: f32,
    pub camera: CameraRigConfig,
    pub character: ClickToMoveConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            projection: ProjectionMode::default(),
            orthographic_size: DEFAULT_ORTHOGRAPHIC_SIZE,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            camera_pitch: DEFAULT_CAMERA_PITCH,
            camera_yaw: DEFAULT_CAMERA_YAW,
            camera: CameraRigConfig::default(),
            character: ClickToMoveConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`, then validate it.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(|message| ConfigError::Load {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply_ini(&ini)?;
        self.validate()?;

        info!(
            "Loaded config from {}: {}x{} window, fps={}, vsync={}, {} camera",
            self.config_path.display(),
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.projection.name()
        );

        Ok(())
    }

    /// Parse configuration from INI text, then validate it.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(|message| ConfigError::Load {
            path: PathBuf::from("<string>"),
            message,
        })?;
        self.apply_ini(&ini)?;
        self.validate()
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        // [window] section
        read_u32(ini, "window", "width", &mut self.window_width)?;
        read_u32(ini, "window", "height", &mut self.window_height)?;
        read_u32(ini, "window", "target_fps", &mut self.target_fps)?;
        read_bool(ini, "window", "vsync", &mut self.vsync)?;

        // [camera] section
        if let Some(name) = ini.get("camera", "projection") {
            self.projection = ProjectionMode::parse(&name).ok_or_else(|| {
                ConfigError::value("camera", "projection", format!("unknown projection '{name}'"))
            })?;
        }
        read_f32(ini, "camera", "orthographic_size", &mut self.orthographic_size)?;
        read_f32(ini, "camera", "field_of_view", &mut self.field_of_view)?;
        read_f32(ini, "camera", "pitch", &mut self.camera_pitch)?;
        read_f32(ini, "camera", "yaw", &mut self.camera_yaw)?;

        let cam = &mut self.camera;
        read_f32(ini, "camera", "edge_scroll_speed", &mut cam.edge_scroll_speed)?;
        read_f32(ini, "camera", "scroll_area_thickness", &mut cam.scroll_area_thickness)?;
        read_f32(ini, "camera", "zoom_speed", &mut cam.zoom_speed)?;
        read_f32(ini, "camera", "min_zoom", &mut cam.min_zoom)?;
        read_f32(ini, "camera", "max_zoom", &mut cam.max_zoom)?;
        read_bool(ini, "camera", "use_boundaries", &mut cam.use_boundaries)?;
        read_f32(ini, "camera", "min_x", &mut cam.bounds.min_x)?;
        read_f32(ini, "camera", "max_x", &mut cam.bounds.max_x)?;
        read_f32(ini, "camera", "min_z", &mut cam.bounds.min_z)?;
        read_f32(ini, "camera", "max_z", &mut cam.bounds.max_z)?;
        read_bool(ini, "camera", "enable_edge_scrolling", &mut cam.enable_edge_scrolling)?;
        read_bool(
            ini,
            "camera",
            "enable_keyboard_controls",
            &mut cam.enable_keyboard_controls,
        )?;
        read_key(ini, "camera", "key_up", &mut cam.keys.up)?;
        read_key(ini, "camera", "key_down", &mut cam.keys.down)?;
        read_key(ini, "camera", "key_left", &mut cam.keys.left)?;
        read_key(ini, "camera", "key_right", &mut cam.keys.right)?;

        // [character] section
        read_f32(ini, "character", "move_speed", &mut self.character.move_speed)?;
        read_f32(ini, "character", "rotation_speed", &mut self.character.rotation_speed)?;

        Ok(())
    }

    /// Reject configurations the controllers cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero (got {}x{})",
                self.window_width, self.window_height
            )));
        }
        if self.window_width > MAX_WINDOW_SIZE || self.window_height > MAX_WINDOW_SIZE {
            return Err(ConfigError::Invalid(format!(
                "window size must be at most {MAX_WINDOW_SIZE}x{MAX_WINDOW_SIZE} (got {}x{})",
                self.window_width, self.window_height
            )));
        }
        if !(self.orthographic_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "orthographic_size must be > 0 (got {})",
                self.orthographic_size
            )));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field_of_view must be between 0 and 180 degrees (got {})",
                self.field_of_view
            )));
        }
        self.camera.validate().map_err(ConfigError::Invalid)?;
        self.character.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Save configuration to `config_path`.
    ///
    /// Creates the file if it doesn't exist. Every key is written.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        self.to_ini().write(&self.config_path)?;
        info!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            ini.set(section, key, Some(value));
        };

        set("window", "width", self.window_width.to_string());
        set("window", "height", self.window_height.to_string());
        set("window", "target_fps", self.target_fps.to_string());
        set("window", "vsync", self.vsync.to_string());

        let cam = &self.camera;
        set("camera", "projection", self.projection.name().to_string());
        set("camera", "orthographic_size", self.orthographic_size.to_string());
        set("camera", "field_of_view", self.field_of_view.to_string());
        set("camera", "pitch", self.camera_pitch.to_string());
        set("camera", "yaw", self.camera_yaw.to_string());
        set("camera", "edge_scroll_speed", cam.edge_scroll_speed.to_string());
        set("camera", "scroll_area_thickness", cam.scroll_area_thickness.to_string());
        set("camera", "zoom_speed", cam.zoom_speed.to_string());
        set("camera", "min_zoom", cam.min_zoom.to_string());
        set("camera", "max_zoom", cam.max_zoom.to_string());
        set("camera", "use_boundaries", cam.use_boundaries.to_string());
        set("camera", "min_x", cam.bounds.min_x.to_string());
        set("camera", "max_x", cam.bounds.max_x.to_string());
        set("camera", "min_z", cam.bounds.min_z.to_string());
        set("camera", "max_z", cam.bounds.max_z.to_string());
        set("camera", "enable_edge_scrolling", cam.enable_edge_scrolling.to_string());
        set(
            "camera",
            "enable_keyboard_controls",
            cam.enable_keyboard_controls.to_string(),
        );
        set("camera", "key_up", key_name(cam.keys.up));
        set("camera", "key_down", key_name(cam.keys.down));
        set("camera", "key_left", key_name(cam.keys.left));
        set("camera", "key_right", key_name(cam.keys.right));

        set("character", "move_speed", self.character.move_speed.to_string());
        set("character", "rotation_speed", self.character.rotation_speed.to_string());

        ini
    }

    /// Path the configuration is loaded from and saved to.
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

fn read_f32(ini: &Ini, section: &str, key: &str, into: &mut f32) -> Result<(), ConfigError> {
    let value = ini
        .getfloat(section, key)
        .map_err(|message| ConfigError::value(section, key, message))?;
    if let Some(value) = value {
        *into = value as f32;
    }
    Ok(())
}

fn read_u32(ini: &Ini, section: &str, key: &str, into: &mut u32) -> Result<(), ConfigError> {
    let value = ini
        .getuint(section, key)
        .map_err(|message| ConfigError::value(section, key, message))?;
    if let Some(value) = value {
        *into = u32::try_from(value)
            .map_err(|_| ConfigError::value(section, key, format!("{value} is too large")))?;
    }
    Ok(())
}

fn read_bool(ini: &Ini, section: &str, key: &str, into: &mut bool) -> Result<(), ConfigError> {
    let value = ini
        .getbool(section, key)
        .map_err(|message| ConfigError::value(section, key, message))?;
    if let Some(value) = value {
        *into = value;
    }
    Ok(())
}

fn read_key(
    ini: &Ini,
    section: &str,
    key: &str,
    into: &mut KeyboardKey,
) -> Result<(), ConfigError> {
    if let Some(name) = ini.get(section, key) {
        *into = parse_key(&name)
            .ok_or_else(|| ConfigError::value(section, key, format!("unknown key '{name}'")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.projection, ProjectionMode::Orthographic);
        assert_eq!(config.camera.edge_scroll_speed, 15.0);
        assert_eq!(config.character.move_speed, 5.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[camera]\nprojection = perspective\nzoom_speed = 4\nkey_up = Up\n\n[character]\nmove_speed = 7.5\n",
            )
            .unwrap();
        assert_eq!(config.projection, ProjectionMode::Perspective);
        assert_eq!(config.camera.zoom_speed, 4.0);
        assert_eq!(config.camera.keys.up, KeyboardKey::KEY_UP);
        assert_eq!(config.camera.keys.down, KeyboardKey::KEY_S);
        assert_eq!(config.character.move_speed, 7.5);
        assert_eq!(config.character.rotation_speed, 10.0);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_bad_values_are_reported_with_their_key() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[camera]\nmin_zoom = lots\n")
            .unwrap_err();
        match err {
            ConfigError::Value { section, key, .. } => {
                assert_eq!(section, "camera");
                assert_eq!(key, "min_zoom");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = GameConfig::new()
            .load_from_str("[camera]\nkey_left = Banana\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Value { .. }));
    }

    #[test]
    fn test_inverted_ranges_are_rejected() {
        let err = GameConfig::new()
            .load_from_str("[camera]\nmin_zoom = 60\nmax_zoom = 20\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::new()
            .load_from_str("[camera]\nmin_x = 5\nmax_x = -5\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_oversized_window_is_rejected() {
        let err = GameConfig::new()
            .load_from_str("[window]\nwidth = 4294967295\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = GameConfig::new();
        config
            .load_from_str(&format!("[window]\nheight = {MAX_WINDOW_SIZE}\n"))
            .unwrap();
        assert_eq!(config.window_height, MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut original = GameConfig::new();
        original.projection = ProjectionMode::Perspective;
        original.camera.use_boundaries = false;
        original.camera.bounds.max_z = 12.5;
        original.camera.keys.right = KeyboardKey::KEY_RIGHT;
        original.character.rotation_speed = 3.0;

        let mut reloaded = GameConfig::new();
        reloaded.load_from_str(&original.to_ini_string()).unwrap();

        assert_eq!(reloaded.projection, original.projection);
        assert_eq!(reloaded.camera, original.camera);
        assert_eq!(reloaded.character, original.character);
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(ConfigError::Load { .. })
        ));
    }
}
