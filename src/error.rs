//! Error handling module for the storefront
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The carousel itself never fails; these cover the terminal and the
//! command-line values around it. Config files report through `anyhow`.

use thiserror::Error;

/// Main error type for the storefront
#[derive(Error, Debug)]
pub enum SiteError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (command-line values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, SiteError>;

// Convenient error constructors
impl SiteError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
