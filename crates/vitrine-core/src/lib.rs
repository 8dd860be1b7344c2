//! Vitrine Core Library
//!
//! Platform-agnostic state and logic for the Vitrine image viewer: the
//! open/zoom state machine, gesture timing, the pan/zoom transform and the
//! scoped key hook that catches Escape while the overlay is open.

pub mod config;
pub mod gesture;
pub mod hook;
pub mod props;
pub mod transform;
pub mod viewer;

pub use config::{ConfigError, ConfigResult, ViewerConfig};
pub use gesture::{SwipeTracker, TapKind, TapTracker};
pub use hook::{EscapeSignal, KeyHook, KeyHookGuard, KeyHookRegistry, NoopKeyHook, ESCAPE_KEY};
pub use props::{ImageProps, PropsError};
pub use transform::ZoomTransform;
pub use viewer::{
    CloseReason, ImageViewer, TapTarget, Transition, ViewerError, ViewerEvent, ViewerPhase,
};

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
