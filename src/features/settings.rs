//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::ResumeMode;
use crate::audio::analyzer::DEFAULT_SMOOTHING;
use crate::visuals::waves::DEFAULT_AMBIENT_WAVES;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window settings
    #[serde(default)]
    pub window: WindowSettings,
    /// Wave field and animation clock
    #[serde(default)]
    pub visuals: VisualSettings,
    /// Playback and analysis
    #[serde(default)]
    pub audio: AudioSettings,
}

/// Initial window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualSettings {
    /// Number of randomly parameterized background waves
    #[serde(default = "default_ambient_waves")]
    pub ambient_waves: usize,
    /// Animation clock increment per tick
    #[serde(default = "default_clock_step")]
    pub clock_step: f32,
    /// Fixed seed for reproducible ambient waves
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_ambient_waves() -> usize {
    DEFAULT_AMBIENT_WAVES
}

fn default_clock_step() -> f32 {
    0.05
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            ambient_waves: default_ambient_waves(),
            clock_step: default_clock_step(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Spectrum smoothing time constant (0.0 = instant, 0.99 = slow)
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    /// What `play` does after a pause
    #[serde(default)]
    pub resume_mode: ResumeMode,
}

fn default_smoothing() -> f32 {
    DEFAULT_SMOOTHING
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            resume_mode: ResumeMode::default(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "subwave", "Subwave")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("Using default settings ({})", e);
                let settings = Self::default();
                if !path.exists() {
                    if let Err(e) = settings.save_to_file(&path) {
                        tracing::warn!("Failed to write default settings: {}", e);
                    }
                }
                settings
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        Ok(settings.sanitized())
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Clamp hand-edited values into usable ranges
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            self.window = defaults.window;
        }
        if !(self.visuals.clock_step.is_finite() && self.visuals.clock_step > 0.0) {
            self.visuals.clock_step = defaults.visuals.clock_step;
        }
        if !self.audio.smoothing.is_finite() {
            self.audio.smoothing = defaults.audio.smoothing;
        }
        self.audio.smoothing = self.audio.smoothing.clamp(0.0, 0.99);
        self
    }
}

/// Settings error types
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("subwave-settings-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 1280.0);
        assert_eq!(settings.window.height, 800.0);
        assert_eq!(settings.visuals.ambient_waves, 20);
        assert_eq!(settings.visuals.clock_step, 0.05);
        assert_eq!(settings.visuals.seed, None);
        assert_eq!(settings.audio.smoothing, 0.8);
        assert_eq!(settings.audio.resume_mode, ResumeMode::Restart);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::default();
        settings.visuals.seed = Some(42);
        settings.audio.resume_mode = ResumeMode::Resume;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "audio": { "resume_mode": "resume" } }"#).unwrap();
        assert_eq!(settings.audio.resume_mode, ResumeMode::Resume);
        assert_eq!(settings.audio.smoothing, 0.8);
        assert_eq!(settings.visuals.ambient_waves, 20);
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let path = temp_path("sanitize");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{ "window": { "width": -5, "height": 100 },
                 "visuals": { "clock_step": 0 },
                 "audio": { "smoothing": 3.0 } }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.window, WindowSettings::default());
        assert_eq!(loaded.visuals.clock_step, 0.05);
        assert_eq!(loaded.audio.smoothing, 0.99);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file(Path::new("/nonexistent/subwave/settings.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let path = temp_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
