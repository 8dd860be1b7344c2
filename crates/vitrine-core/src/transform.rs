//! Pan/zoom transform for the overlay image.

use kurbo::{Point, Rect, Size, Vec2};

/// Scale-and-translate state applied to the image while zoomed.
///
/// `scale` is relative to the fit-to-screen scale (1.0 = fitted), and
/// `offset` moves the image center away from the viewport center. Focus
/// points are expressed in the same centered space.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTransform {
    /// Current translation of the image center (pan)
    pub offset: Vec2,
    /// Current magnification relative to fit
    pub scale: f64,
    /// Minimum allowed magnification
    pub min_scale: f64,
    /// Maximum allowed magnification
    pub max_scale: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: 1.0,
            max_scale: 4.0,
        }
    }
}

impl ZoomTransform {
    /// Create an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identity transform with a custom upper bound.
    pub fn with_max_scale(max_scale: f64) -> Self {
        Self {
            max_scale: max_scale.max(1.0),
            ..Self::default()
        }
    }

    /// Scale that fits `content` inside the padded `viewport`.
    pub fn fit_scale(content: Size, viewport: Size, padding: f64) -> f64 {
        if content.is_zero_area() {
            return 1.0;
        }

        let padded = Size::new(
            (viewport.width - padding * 2.0).max(1.0),
            (viewport.height - padding * 2.0).max(1.0),
        );

        (padded.width / content.width).min(padded.height / content.height)
    }

    /// Screen rect of the image for the given viewport.
    pub fn image_rect(&self, content: Size, viewport: Size, padding: f64) -> Rect {
        let fit = Self::fit_scale(content, viewport, padding);
        let size = content * (fit * self.scale);
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0) + self.offset;
        Rect::from_center_size(center, size)
    }

    /// Zoom by `factor`, keeping the centered-space point `focus` fixed.
    pub fn zoom_at(&mut self, focus: Point, factor: f64) {
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }

        // Image point under the focus stays under the focus
        let ratio = new_scale / self.scale;
        let focus = focus.to_vec2();
        self.offset = focus - (focus - self.offset) * ratio;
        self.scale = new_scale;
    }

    /// Zoom to an absolute magnification around `focus`.
    pub fn zoom_to(&mut self, focus: Point, scale: f64) {
        self.zoom_at(focus, scale / self.scale);
    }

    /// Pan by a delta in screen points.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Keep the image covering the viewport: the offset may not exceed the
    /// amount by which the magnified image overflows the viewport.
    pub fn clamp_pan(&mut self, content: Size, viewport: Size, padding: f64) {
        let rect = self.image_rect(content, viewport, padding);
        let max_x = ((rect.width() - viewport.width) / 2.0).max(0.0);
        let max_y = ((rect.height() - viewport.height) / 2.0).max(0.0);
        self.offset = Vec2::new(
            self.offset.x.clamp(-max_x, max_x),
            self.offset.y.clamp(-max_y, max_y),
        );
    }

    /// Reset to the fitted, centered state.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// Whether the transform is the fitted, centered state.
    pub fn is_identity(&self) -> bool {
        self.offset == Vec2::ZERO && (self.scale - 1.0).abs() < f64::EPSILON
    }
}
