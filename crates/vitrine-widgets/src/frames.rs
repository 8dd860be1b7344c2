//! Frames for page sections and overlay chrome.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::colors::GRAY;
use crate::{sizing, theme};

/// Frame for the page header bar.
pub fn header_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(24, 12))
}

/// Frame for the page footer.
pub fn footer_frame() -> Frame {
    Frame::new()
        .fill(GRAY.level(100))
        .inner_margin(Margin::symmetric(24, 32))
}

/// Dark translucent pill holding the overlay zoom controls.
pub fn control_bar_frame() -> Frame {
    Frame::new()
        .fill(Color32::from_black_alpha(160))
        .corner_radius(CornerRadius::same(sizing::LARGE as u8))
        .inner_margin(Margin::symmetric(8, 4))
}
