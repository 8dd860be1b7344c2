//! Layout helpers: separators, section labels.

use egui::{Pos2, Stroke, Ui};

use crate::colors::GRAY;
use crate::theme;

/// Draw a full-width horizontal rule.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 8.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, GRAY.level(200)),
    );
    ui.add_space(16.0);
}

/// Draw a section heading (small, bold, uppercase).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(12.0)
            .strong()
            .color(theme::TEXT),
    );
    ui.add_space(4.0);
}

/// Draw a line of secondary text.
pub fn muted_text(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(13.0).color(theme::TEXT_MUTED));
}
