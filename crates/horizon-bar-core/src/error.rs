//! Error types for Horizon Bar.
//!
//! Out-of-range values are never errors; they are clamped silently by the
//! setters that receive them. The variants below only cover input that cannot
//! be coerced into something meaningful at the host-facing boundary.

use thiserror::Error;

/// The main error type for Horizon Bar operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BarError {
    /// An orientation name that is not one of the four fill directions.
    #[error("invalid orientation '{0}': expected one of lr, rl, bt, tb")]
    InvalidOrientation(String),

    /// An easing curve name that does not map to a known curve.
    #[error("invalid easing curve '{0}'")]
    InvalidEasing(String),

    /// A configuration document could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),
}

impl BarError {
    /// Create an orientation error.
    pub fn invalid_orientation(name: impl Into<String>) -> Self {
        Self::InvalidOrientation(name.into())
    }

    /// Create an easing error.
    pub fn invalid_easing(name: impl Into<String>) -> Self {
        Self::InvalidEasing(name.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}

/// A specialized Result type for Horizon Bar operations.
pub type Result<T> = std::result::Result<T, BarError>;
