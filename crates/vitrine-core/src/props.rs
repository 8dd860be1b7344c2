//! Embedding contract of the image viewer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default thumbnail box width.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 700;
/// Default thumbnail box height.
pub const DEFAULT_THUMBNAIL_HEIGHT: u32 = 400;

/// Prop validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("Image source must not be empty")]
    EmptySource,
    #[error("Alt text must not be empty")]
    EmptyAlt,
    #[error("Image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Props supplied by the page that embeds the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProps {
    /// Image resource locator (path or URI)
    pub src: String,
    /// Accessible text
    pub alt: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Thumbnail box width
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
    /// Thumbnail box height
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: u32,
}

fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_thumbnail_height() -> u32 {
    DEFAULT_THUMBNAIL_HEIGHT
}

impl ImageProps {
    /// Create props with the default thumbnail box.
    pub fn new(src: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width,
            height,
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            thumbnail_height: DEFAULT_THUMBNAIL_HEIGHT,
        }
    }

    /// Check the contract.
    pub fn validate(&self) -> Result<(), PropsError> {
        if self.src.trim().is_empty() {
            return Err(PropsError::EmptySource);
        }
        if self.alt.trim().is_empty() {
            return Err(PropsError::EmptyAlt);
        }
        if self.width == 0 || self.height == 0 {
            return Err(PropsError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Intrinsic size.
    pub fn size(&self) -> kurbo::Size {
        kurbo::Size::new(self.width as f64, self.height as f64)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }

    /// Thumbnail size for the available width, keeping the aspect ratio.
    ///
    /// The thumbnail fills the available width up to the thumbnail box and
    /// is scaled down further if its height would exceed the box.
    pub fn thumbnail_size(&self, available_width: f64) -> kurbo::Size {
        let max_width = available_width.min(self.thumbnail_width as f64).max(0.0);
        let ratio = self.aspect_ratio();
        let mut width = max_width;
        let mut height = width / ratio;
        let max_height = self.thumbnail_height as f64;
        if height > max_height {
            height = max_height;
            width = height * ratio;
        }
        kurbo::Size::new(width, height)
    }

    /// Locator usable by URI-based image loaders.
    ///
    /// Values that already carry a scheme pass through unchanged. Bare paths
    /// become `file://` URIs on native targets and stay relative on the web,
    /// where the host resolves them against the page origin.
    pub fn uri(&self) -> String {
        if self.src.contains("://") || self.src.starts_with("bytes:") {
            return self.src.clone();
        }
        if cfg!(target_arch = "wasm32") {
            self.src.clone()
        } else {
            format!("file://{}", self.src)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> ImageProps {
        ImageProps::new("attractive.png", "Attractive png", 2514, 1406)
    }

    #[test]
    fn test_valid_props() {
        assert_eq!(props().validate(), Ok(()));
    }

    #[test]
    fn test_empty_source() {
        let mut p = props();
        p.src = "  ".to_string();
        assert_eq!(p.validate(), Err(PropsError::EmptySource));
    }

    #[test]
    fn test_empty_alt() {
        let mut p = props();
        p.alt.clear();
        assert_eq!(p.validate(), Err(PropsError::EmptyAlt));
    }

    #[test]
    fn test_zero_dimension() {
        let mut p = props();
        p.height = 0;
        assert_eq!(
            p.validate(),
            Err(PropsError::ZeroDimension { width: 2514, height: 0 })
        );
    }

    #[test]
    fn test_thumbnail_fills_width() {
        let p = ImageProps::new("a.png", "a", 2000, 1000);
        let size = p.thumbnail_size(600.0);
        assert!((size.width - 600.0).abs() < 1e-10);
        assert!((size.height - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_thumbnail_limited_by_box() {
        let p = ImageProps::new("a.png", "a", 1000, 1000);
        let size = p.thumbnail_size(2000.0);
        // 700 wide would be 700 tall, box height is 400
        assert!((size.width - 400.0).abs() < 1e-10);
        assert!((size.height - 400.0).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_default_thumbnail() {
        let p: ImageProps = serde_json::from_str(
            r#"{ "src": "a.png", "alt": "a", "width": 10, "height": 20 }"#,
        )
        .unwrap();
        assert_eq!(p.thumbnail_width, DEFAULT_THUMBNAIL_WIDTH);
        assert_eq!(p.thumbnail_height, DEFAULT_THUMBNAIL_HEIGHT);
    }

    #[test]
    fn test_uri_passthrough() {
        let p = ImageProps::new("https://example.com/a.png", "a", 1, 1);
        assert_eq!(p.uri(), "https://example.com/a.png");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_uri_bare_path_native() {
        assert_eq!(props().uri(), "file://attractive.png");
    }
}
