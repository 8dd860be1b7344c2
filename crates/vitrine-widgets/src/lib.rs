//! egui widgets for the Vitrine landing page.
//!
//! - **Viewer**: the zoomable image with its overlay
//! - **Buttons**: overlay controls, call-to-action buttons, nav links
//! - **Colors**: Tailwind palette subset
//! - **Frames**: header, footer and control bar frames
//! - **Layout**: separators, section labels

pub mod buttons;
pub mod colors;
pub mod frames;
pub mod layout;
pub mod viewer;

pub use buttons::{ControlButton, ControlButtonStyle, CtaButton, CtaVariant, NavLink};
pub use colors::{TailwindColor, BLUE, GRAY};
pub use frames::{control_bar_frame, footer_frame, header_frame};
pub use layout::{muted_text, section_label, separator};
pub use viewer::{ViewerResponse, ZoomableImage};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Compact control size
    pub const MEDIUM: f32 = 28.0;
    /// Overlay control size
    pub const LARGE: f32 = 36.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 6;
    /// Maximum width of page content
    pub const CONTENT_WIDTH: f32 = 1024.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Body text (gray-700)
    pub const TEXT: Color32 = Color32::from_rgb(55, 65, 81);
    /// Secondary text (gray-500)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Border color (gray-200)
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
    /// Accent color (blue-600)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
}
