//! Button components: overlay controls, call-to-action buttons, nav links.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::colors::{BLUE, GRAY};
use crate::{sizing, theme};

/// Style configuration for round overlay control buttons.
#[derive(Clone)]
pub struct ControlButtonStyle {
    /// Button diameter
    pub size: f32,
    /// Glyph font size
    pub glyph_size: f32,
    /// Background fill
    pub bg_color: Color32,
    /// Background fill when hovered
    pub hover_color: Color32,
    /// Glyph color
    pub glyph_color: Color32,
}

impl Default for ControlButtonStyle {
    fn default() -> Self {
        Self {
            size: sizing::LARGE,
            glyph_size: 18.0,
            bg_color: Color32::from_black_alpha(140),
            hover_color: Color32::from_black_alpha(200),
            glyph_color: Color32::WHITE,
        }
    }
}

impl ControlButtonStyle {
    /// Smaller variant used inside the zoom control bar.
    pub fn compact() -> Self {
        Self {
            size: sizing::MEDIUM,
            glyph_size: 15.0,
            bg_color: Color32::TRANSPARENT,
            hover_color: Color32::from_white_alpha(40),
            ..Default::default()
        }
    }
}

/// A round button showing a single glyph, drawn over the dimmed backdrop.
pub struct ControlButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    style: ControlButtonStyle,
}

impl<'a> ControlButton<'a> {
    /// Create a new control button.
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            style: ControlButtonStyle::default(),
        }
    }

    /// Use the compact style.
    pub fn compact(mut self) -> Self {
        self.style = ControlButtonStyle::compact();
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(self.style.size), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.style.hover_color
            } else {
                self.style.bg_color
            };
            ui.painter()
                .circle_filled(rect.center(), self.style.size / 2.0, bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(self.style.glyph_size),
                self.style.glyph_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    /// Solid blue
    Primary,
    /// Outlined, transparent fill
    Secondary,
}

/// A call-to-action button with a text label.
pub struct CtaButton<'a> {
    label: &'a str,
    variant: CtaVariant,
    height: f32,
    font_size: f32,
}

impl<'a> CtaButton<'a> {
    /// Create a solid button.
    pub fn primary(label: &'a str) -> Self {
        Self {
            label,
            variant: CtaVariant::Primary,
            height: 40.0,
            font_size: 14.0,
        }
    }

    /// Create an outlined button.
    pub fn secondary(label: &'a str) -> Self {
        Self {
            variant: CtaVariant::Secondary,
            ..Self::primary(label)
        }
    }

    /// Set the button height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let size = vec2(galley.size().x + 32.0, self.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            let hovered = response.hovered();
            let text_color = match self.variant {
                CtaVariant::Primary => {
                    let fill = if hovered { BLUE.level(700) } else { BLUE.level(600) };
                    ui.painter().rect_filled(rect, radius, fill);
                    Color32::WHITE
                }
                CtaVariant::Secondary => {
                    if hovered {
                        ui.painter().rect_filled(rect, radius, GRAY.level(100));
                    }
                    ui.painter().rect_stroke(
                        rect,
                        radius,
                        Stroke::new(1.0, GRAY.level(300)),
                        StrokeKind::Inside,
                    );
                    theme::TEXT
                }
            };

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A text link in the page navigation.
pub struct NavLink<'a> {
    label: &'a str,
    font_size: f32,
}

impl<'a> NavLink<'a> {
    /// Create a new nav link.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            font_size: 14.0,
        }
    }

    /// Show the link and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::click());

        if ui.is_rect_visible(rect) {
            let color = if response.hovered() {
                theme::ACCENT
            } else {
                theme::TEXT
            };
            ui.painter()
                .text(rect.left_center(), Align2::LEFT_CENTER, self.label, font_id, color);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
