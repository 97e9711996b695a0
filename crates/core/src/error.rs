//! Error types for U-Stacking.

use thiserror::Error;

/// Result type alias for U-Stacking operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during stack planning operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A box or pallet dimension is non-finite, zero, or negative.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
