//! Error types for star generation

use thiserror::Error;

/// Errors that can occur while generating a Siemens star
#[derive(Debug, Error)]
pub enum StarError {
    /// Spoke count below the minimum of two
    #[error("spoke count must be larger than 1, got {spokes}")]
    InvalidArgument { spokes: i64 },

    /// Page whose margin leaves no room for the star
    #[error("margin {margin} leaves no drawable area on a {width}x{height} page")]
    InvalidPage { width: f64, height: f64, margin: f64 },

    /// Failure writing the output document
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

impl StarError {
    /// Create an invalid spoke count error
    pub fn invalid_argument(spokes: i64) -> Self {
        Self::InvalidArgument { spokes }
    }

    /// Create an invalid page error
    pub fn invalid_page(width: f64, height: f64, margin: f64) -> Self {
        Self::InvalidPage {
            width,
            height,
            margin,
        }
    }
}
