//! Application-wide error types.

use thiserror::Error;

use crate::types::MultiplierError;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input document or field is malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Exchange amount could not be computed.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conversion(_) => "CONVERSION_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Returns true if fixing the input is enough to recover.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Conversion(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<MultiplierError> for AppError {
    fn from(err: MultiplierError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
