//! Vitrine application
//!
//! The landing page shell: windowing, surface management and the egui
//! frame loop hosting the image viewer.

mod app;
pub mod assets;
mod config;
mod error;
mod page;
mod shortcuts;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use page::LandingPage;
pub use shortcuts::{Gesture, GestureRegistry};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{run_wasm, WindowKeyHook};
