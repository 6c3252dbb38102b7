// SPDX-License-Identifier: GPL-3.0-only

//! Error types for exposure calculation and the surrounding application

use crate::exposure::ExposureParameter;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Exposure calculation errors
    Exposure(ExposureError),
    /// Configuration errors (malformed or unreadable config file)
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Exposure-specific errors
///
/// All of these are input-validation failures. Callers are expected to clamp
/// values through [`ExposureBounds`](crate::exposure::ExposureBounds) first.
#[derive(Debug, Clone, PartialEq)]
pub enum ExposureError {
    /// A parameter was zero, negative or not finite
    InvalidArgument {
        parameter: ExposureParameter,
        value: f64,
    },
    /// Device-reported limits are unusable (non-positive or min above max)
    InvalidBounds {
        parameter: ExposureParameter,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Exposure(e) => write!(f, "Exposure error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ExposureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureError::InvalidArgument { parameter, value } => write!(
                f,
                "Invalid {}: {} (must be a positive, finite number)",
                parameter.display_name(),
                value
            ),
            ExposureError::InvalidBounds {
                parameter,
                min,
                max,
            } => write!(
                f,
                "Invalid {} range: {}..{}",
                parameter.display_name(),
                min,
                max
            ),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ExposureError {}

impl From<ExposureError> for AppError {
    fn from(err: ExposureError) -> Self {
        AppError::Exposure(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
