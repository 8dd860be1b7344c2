//! Viewer configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Gap under which two taps count as a double-tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;
/// Vertical displacement a swipe must exceed to dismiss the overlay.
pub const DEFAULT_SWIPE_DISMISS_PX: f64 = 50.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for gesture recognition and the overlay.
///
/// Magnification values are relative to the fit-to-screen scale, so `1.0`
/// is the image exactly fitted inside the padded viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Double-tap window in milliseconds (strictly less than).
    pub double_tap_window_ms: u64,
    /// Swipe dismiss threshold in pixels (strictly greater than).
    pub swipe_dismiss_px: f64,
    /// Magnification applied by a double-tap.
    pub double_tap_zoom: f64,
    /// Factor applied by the zoom-in / zoom-out controls.
    pub zoom_step: f64,
    /// Upper bound on magnification.
    pub max_zoom: f64,
    /// Backdrop opacity (0.0-1.0).
    pub backdrop_opacity: f32,
    /// Padding around the fitted image, in points.
    pub overlay_padding: f32,
    /// Duration of the overlay fade, in milliseconds.
    pub show_animation_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            swipe_dismiss_px: DEFAULT_SWIPE_DISMISS_PX,
            double_tap_zoom: 2.0,
            zoom_step: 1.25,
            max_zoom: 4.0,
            backdrop_opacity: 0.8,
            overlay_padding: 20.0,
            show_animation_ms: 300,
        }
    }
}

impl ViewerConfig {
    /// Double-tap window as a duration.
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }

    /// Overlay fade duration in seconds.
    pub fn animation_secs(&self) -> f32 {
        self.show_animation_ms as f32 / 1000.0
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.double_tap_window_ms == 0 {
            return Err(ConfigError::Invalid(
                "double_tap_window_ms must be positive".to_string(),
            ));
        }
        if !(self.swipe_dismiss_px.is_finite() && self.swipe_dismiss_px > 0.0) {
            return Err(ConfigError::Invalid(
                "swipe_dismiss_px must be a positive number".to_string(),
            ));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= 1.0) {
            return Err(ConfigError::Invalid("max_zoom must be at least 1.0".to_string()));
        }
        if !(self.double_tap_zoom > 1.0 && self.double_tap_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "double_tap_zoom must be in (1.0, {}]",
                self.max_zoom
            )));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::Invalid("zoom_step must be greater than 1.0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.backdrop_opacity) {
            return Err(ConfigError::Invalid(
                "backdrop_opacity must be within 0.0-1.0".to_string(),
            ));
        }
        if !(self.overlay_padding.is_finite() && self.overlay_padding >= 0.0) {
            return Err(ConfigError::Invalid(
                "overlay_padding must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded viewer config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.double_tap_window(), Duration::from_millis(300));
        assert!((config.swipe_dismiss_px - 50.0).abs() < f64::EPSILON);
        assert!((config.backdrop_opacity - 0.8).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ViewerConfig::from_json(r#"{ "swipe_dismiss_px": 80.0 }"#).unwrap();
        assert!((config.swipe_dismiss_px - 80.0).abs() < f64::EPSILON);
        assert_eq!(config.double_tap_window_ms, DEFAULT_DOUBLE_TAP_WINDOW_MS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = ViewerConfig::from_json(r#"{ "double_tap_window_ms": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = ViewerConfig::from_json(r#"{ "double_tap_zoom": 8.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = ViewerConfig::from_json(r#"{ "backdrop_opacity": 1.5 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = ViewerConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "zoom_step": 1.5 }}"#).unwrap();

        let config = ViewerConfig::load(file.path()).unwrap();
        assert!((config.zoom_step - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ViewerConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
