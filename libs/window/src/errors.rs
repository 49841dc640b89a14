//! Error types for the number window

use thiserror::Error;

/// Errors raised while building a window.
///
/// Merging and averaging are total; only construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window capacity must be at least 1")]
    ZeroCapacity,
}
