//! Viewer errors

use cifra_autoscroll::AutoScrollError;
use cifra_core::CifraError;
use thiserror::Error;

/// Errors raised while building a sheet viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    /// A record was missing or malformed
    #[error(transparent)]
    Record(#[from] CifraError),

    /// Auto-scroll configuration was rejected
    #[error(transparent)]
    AutoScroll(#[from] AutoScrollError),
}

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;
