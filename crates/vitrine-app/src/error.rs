//! Application error types.

use thiserror::Error;
use vitrine_core::{ConfigError, ViewerError};

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to attach canvas: {0}")]
    Canvas(String),
    #[error("Failed to create surface: {0}")]
    Surface(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid showcase viewer: {0}")]
    Viewer(#[from] ViewerError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
