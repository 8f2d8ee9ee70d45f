use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub screen: ScreenSettings,
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Screen geometry the gesture math is normalized against
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenSettings {
    #[serde(default = "default_screen_width")]
    pub width: f64,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GestureSettings {
    /// Commit threshold as a fraction of screen width
    #[serde(default = "default_threshold_fraction")]
    pub threshold_fraction: f64,
    /// Card rotation in degrees at full horizontal traversal
    #[serde(default = "default_rotation_factor_deg")]
    pub rotation_factor_deg: f64,
    /// Rotation target in degrees while a commit exits
    #[serde(default = "default_commit_rotation_deg")]
    pub commit_rotation_deg: f64,
    /// Exit target as a multiple of screen width
    #[serde(default = "default_exit_distance_factor")]
    pub exit_distance_factor: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            threshold_fraction: default_threshold_fraction(),
            rotation_factor_deg: default_rotation_factor_deg(),
            commit_rotation_deg: default_commit_rotation_deg(),
            exit_distance_factor: default_exit_distance_factor(),
        }
    }
}

impl GestureSettings {
    /// Commit threshold in screen points
    pub fn threshold(&self, screen_width: f64) -> f64 {
        self.threshold_fraction * screen_width
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationSettings {
    #[serde(default = "default_fade_ms")]
    pub fade_out_ms: u64,
    #[serde(default = "default_fade_ms")]
    pub fade_in_ms: u64,
    /// Time for the direction signal to settle at +/-1 (commit) or 0 (revert)
    #[serde(default = "default_direction_settle_ms")]
    pub direction_settle_ms: u64,
    #[serde(default = "default_spring_stiffness")]
    pub spring_stiffness: f64,
    #[serde(default = "default_spring_damping")]
    pub spring_damping: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_ms(),
            fade_in_ms: default_fade_ms(),
            direction_settle_ms: default_direction_settle_ms(),
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
        }
    }
}

/// Overlay indicator colors as [r, g, b, a] with channels in 0-255 / 0.0-1.0
#[derive(Debug, Clone, Deserialize)]
pub struct OverlaySettings {
    #[serde(default = "default_left_color")]
    pub left_color: [f64; 4],
    #[serde(default = "default_right_color")]
    pub right_color: [f64; 4],
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            left_color: default_left_color(),
            right_color: default_right_color(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_screen_width() -> f64 { 390.0 }
fn default_threshold_fraction() -> f64 { 0.3 }
fn default_rotation_factor_deg() -> f64 { 12.0 }
fn default_commit_rotation_deg() -> f64 { 25.0 }
fn default_exit_distance_factor() -> f64 { 1.5 }
fn default_fade_ms() -> u64 { 300 }
fn default_direction_settle_ms() -> u64 { 200 }
fn default_spring_stiffness() -> f64 { 100.0 }
fn default_spring_damping() -> f64 { 15.0 }
fn default_left_color() -> [f64; 4] { [255.0, 70.0, 70.0, 0.6] }
fn default_right_color() -> [f64; 4] { [46.0, 204.0, 113.0, 0.6] }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROOMLY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROOMLY_)
            // e.g., ROOMLY_GESTURE__THRESHOLD_FRACTION -> gesture.threshold_fraction
            .add_source(
                Environment::with_prefix("ROOMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
