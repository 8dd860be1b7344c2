//! Viewer gestures and keys, for help output.

/// An input binding of the image viewer.
#[derive(Debug, Clone)]
pub struct Gesture {
    pub input: &'static str,
    /// Viewer state the binding applies in
    pub when: &'static str,
    pub description: &'static str,
}

impl Gesture {
    pub const fn new(input: &'static str, when: &'static str, description: &'static str) -> Self {
        Self {
            input,
            when,
            description,
        }
    }

    /// Format the binding for display (e.g., "Escape (open)").
    pub fn format(&self) -> String {
        format!("{} ({})", self.input, self.when)
    }
}

/// Registry of all viewer bindings.
pub struct GestureRegistry;

impl GestureRegistry {
    /// Get all registered bindings.
    pub fn all() -> Vec<Gesture> {
        vec![
            Gesture::new("Click thumbnail", "closed", "Open the image"),
            Gesture::new("Double-tap image", "open", "Toggle zoom at the tapped point"),
            Gesture::new("Drag", "zoomed", "Pan the image"),
            Gesture::new("+ / - / 1:1", "zoomed", "Zoom in, zoom out, fit to screen"),
            Gesture::new("Swipe up or down", "open", "Close"),
            Gesture::new("Click backdrop", "open", "Close"),
            Gesture::new("Escape", "open", "Close"),
            Gesture::new("× button", "open", "Close"),
        ]
    }

    /// Log all bindings.
    pub fn log_all() {
        log::info!("Image viewer controls:");
        for gesture in Self::all() {
            log::info!("  {:24} {}", gesture.format(), gesture.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let gesture = Gesture::new("Escape", "open", "Close");
        assert_eq!(gesture.format(), "Escape (open)");
    }

    #[test]
    fn test_every_close_path_listed() {
        let closes = GestureRegistry::all()
            .into_iter()
            .filter(|g| g.description == "Close")
            .count();
        assert_eq!(closes, 4);
    }
}
