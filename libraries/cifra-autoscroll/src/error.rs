//! Error types for auto-scroll configuration
//!
//! The controller itself never fails at runtime: out-of-range speeds are
//! clamped and redundant start/stop calls are no-ops. Only configuration can
//! be rejected.

use thiserror::Error;

/// Auto-scroll errors
#[derive(Debug, Error)]
pub enum AutoScrollError {
    /// Configuration values are inconsistent
    #[error("Invalid auto-scroll configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for auto-scroll operations
pub type Result<T> = std::result::Result<T, AutoScrollError>;
