//! Application configuration.

use std::path::Path;

use peniko::Color;
use serde::{Deserialize, Serialize};
use vitrine_core::{ConfigError, ConfigResult, ImageProps, ViewerConfig};

/// Page background used when the configured color does not parse.
const DEFAULT_BACKGROUND: Color = Color::from_rgba8(243, 244, 246, 255);

/// Parse a color from hex string (e.g., "#f3f4f6").
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') && s.len() == 7 && s.is_ascii() {
        let r = u8::from_str_radix(&s[1..3], 16).ok()?;
        let g = u8::from_str_radix(&s[3..5], 16).ok()?;
        let b = u8::from_str_radix(&s[5..7], 16).ok()?;
        Some(Color::from_rgba8(r, g, b, 255))
    } else {
        None
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Page background as "#rrggbb"
    pub background: String,
    /// Image shown in the showcase section
    pub showcase: ImageProps,
    pub viewer: ViewerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Company".to_string(),
            width: 1280,
            height: 800,
            background: "#f3f4f6".to_string(),
            showcase: ImageProps::new("attractive.png", "Attractive png", 2514, 1406),
            viewer: ViewerConfig::default(),
        }
    }
}

impl AppConfig {
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
        log::info!("Loaded app config from {}", path.display());
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if parse_color(&self.background).is_none() {
            return Err(ConfigError::Invalid(format!(
                "background must be #rrggbb, got {:?}",
                self.background
            )));
        }
        self.showcase
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.viewer.validate()
    }

    /// Page background color.
    pub fn background_color(&self) -> Color {
        parse_color(&self.background).unwrap_or(DEFAULT_BACKGROUND)
    }
}
