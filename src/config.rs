//! Configuration file support for PVAT.
//!
//! This module provides serialization and deserialization of application settings:
//! editor styling and picking tolerances, the camera used by the command-line
//! front end, keybindings and the category list.

use pvat_scene::{Camera, SceneError, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HANDLE_RADIUS, DEFAULT_PICK_THRESHOLD, FALLBACK_COLOR, HANDLE_LAYER_Z, HANDLE_OPACITY,
    LINE_WIDTH, SELECTED_LINE_WIDTH,
};
use crate::keybindings::KeyBindings;
use crate::model::{Category, default_categories};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Editor styling and picking
    #[serde(default)]
    pub editor: EditorConfig,

    /// Camera used when no host supplies one
    #[serde(default)]
    pub camera: CameraConfig,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,

    /// Category definitions, in cycle order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

fn default_app_name() -> String {
    "PVAT".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Start with flatten mode enabled
    #[serde(default)]
    pub flatten: bool,
}

/// Styling and picking parameters for the polygon editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// World-space radius of vertex handles
    pub handle_radius: f32,
    /// Extra slack added to the handle radius when hit-testing
    pub pick_threshold: f32,
    /// Display z for handles in flatten mode and for vertices lying on the plane
    pub flatten_z: f32,
    /// Handle opacity in `[0, 1]`
    pub handle_opacity: f32,
    /// Outline width of unselected polygons
    pub line_width: f32,
    /// Outline width of the selected polygon
    pub selected_line_width: f32,
    /// Color used when a polygon's category id is not in the list
    pub fallback_color: [u8; 3],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_radius: DEFAULT_HANDLE_RADIUS,
            pick_threshold: DEFAULT_PICK_THRESHOLD,
            flatten_z: HANDLE_LAYER_Z,
            handle_opacity: HANDLE_OPACITY,
            line_width: LINE_WIDTH,
            selected_line_width: SELECTED_LINE_WIDTH,
            fallback_color: FALLBACK_COLOR,
        }
    }
}

/// Perspective camera description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        // Looking down at the working plane from above, tilted slightly so
        // that +y points away from the viewer.
        Self {
            eye: [0.0, -10.0, 20.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    /// Build a perspective camera for a viewport with the given aspect ratio.
    pub fn build(&self, aspect: f32) -> Result<Camera, SceneError> {
        Camera::perspective(
            Vec3::from(self.eye),
            Vec3::from(self.target),
            Vec3::from(self.up),
            self.fov_y_degrees.to_radians(),
            aspect,
            self.near,
            self.far,
        )
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            editor: EditorConfig::default(),
            camera: CameraConfig::default(),
            keybindings: KeyBindings::default(),
            categories: default_categories(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read configuration from a file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "pvat-config.json"
    }

    /// Get the default config file path for auto-load/save.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("pvat").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("pvat")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns `Ok(None)` if there is no config file there.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::default_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    /// Save configuration to the default path, returning where it was written.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<std::path::PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(&path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
