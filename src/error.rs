//! Error handling for the bytelanes library
//!
//! The hot paths in this crate are branchless by design, so validation is
//! hoisted to the API boundary: fallible entry points are the ones that
//! accept caller-supplied scratch memory or sequence descriptors. Everything
//! downstream of a successful check runs without error plumbing.

use thiserror::Error;

/// Main error type for the bytelanes library
#[derive(Error, Debug)]
pub enum BytelanesError {
    /// Malformed input that cannot be processed
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Caller-provided scratch buffer is smaller than the sizing query reported
    #[error("Scratch buffer too small: needed {needed} bytes, provided {provided}")]
    ScratchTooSmall {
        /// Minimum number of bytes the operation requires
        needed: usize,
        /// Number of bytes the caller provided
        provided: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl BytelanesError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a scratch-too-small error
    pub fn scratch_too_small(needed: usize, provided: usize) -> Self {
        Self::ScratchTooSmall { needed, provided }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BytelanesError>;

/// Assert that a caller-provided scratch buffer meets the sizing query
#[inline]
pub fn check_scratch(provided: usize, needed: usize) -> Result<()> {
    if provided < needed {
        Err(BytelanesError::scratch_too_small(needed, provided))
    } else {
        Ok(())
    }
}
