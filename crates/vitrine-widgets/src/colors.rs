//! Tailwind color palette used by the page and the overlay.

use egui::Color32;

/// A Tailwind color with all shade variants (50-950).
#[derive(Clone, Copy)]
pub struct TailwindColor {
    /// Shades from 50 to 950 (11 total)
    pub shades: [Color32; 11],
}

impl TailwindColor {
    /// Create a new TailwindColor from RGB tuples.
    pub const fn new(shades: [(u8, u8, u8); 11]) -> Self {
        Self {
            shades: [
                Color32::from_rgb(shades[0].0, shades[0].1, shades[0].2),
                Color32::from_rgb(shades[1].0, shades[1].1, shades[1].2),
                Color32::from_rgb(shades[2].0, shades[2].1, shades[2].2),
                Color32::from_rgb(shades[3].0, shades[3].1, shades[3].2),
                Color32::from_rgb(shades[4].0, shades[4].1, shades[4].2),
                Color32::from_rgb(shades[5].0, shades[5].1, shades[5].2),
                Color32::from_rgb(shades[6].0, shades[6].1, shades[6].2),
                Color32::from_rgb(shades[7].0, shades[7].1, shades[7].2),
                Color32::from_rgb(shades[8].0, shades[8].1, shades[8].2),
                Color32::from_rgb(shades[9].0, shades[9].1, shades[9].2),
                Color32::from_rgb(shades[10].0, shades[10].1, shades[10].2),
            ],
        }
    }

    /// Get shade by Tailwind level (50, 100, ..., 900, 950).
    ///
    /// Unknown levels fall back to 500.
    pub const fn level(&self, level: u16) -> Color32 {
        let index = match level {
            50 => 0,
            100 => 1,
            200 => 2,
            300 => 3,
            400 => 4,
            600 => 6,
            700 => 7,
            800 => 8,
            900 => 9,
            950 => 10,
            _ => 5,
        };
        self.shades[index]
    }
}

/// Tailwind gray.
pub const GRAY: TailwindColor = TailwindColor::new([
    (249, 250, 251), (243, 244, 246), (229, 231, 235), (209, 213, 219),
    (156, 163, 175), (107, 114, 128), (75, 85, 99), (55, 65, 81),
    (31, 41, 55), (17, 24, 39), (3, 7, 18),
]);

/// Tailwind blue.
pub const BLUE: TailwindColor = TailwindColor::new([
    (239, 246, 255), (219, 234, 254), (191, 219, 254), (147, 197, 253),
    (96, 165, 250), (59, 130, 246), (37, 99, 235), (29, 78, 216),
    (30, 64, 175), (30, 58, 138), (23, 37, 84),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_lookup() {
        assert_eq!(BLUE.level(600), Color32::from_rgb(37, 99, 235));
        assert_eq!(GRAY.level(100), Color32::from_rgb(243, 244, 246));
        assert_eq!(GRAY.level(123), GRAY.level(500));
    }
}
