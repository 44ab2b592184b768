//! Error types for scroller-menu
//!
//! - `MenuError` covers configuration of the control
//! - `Result` is the crate-wide alias

use thiserror::Error;

/// Top-level error type for scroller-menu
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Menu needs at least 2 items, got {count}")]
    TooFewItems { count: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MenuError
pub type Result<T> = std::result::Result<T, MenuError>;
