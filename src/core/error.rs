//! Error handling logic

use std::fmt;

/// Error types for state construction, validation, and rendering.
/// Each error is terminal for the call that raised it; the library never
/// retries and never returns partial output.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum MistError {
    /// A subsystem of the state space is not two-valued.
    /// The glyph alphabet only depicts binary positions, so rendering such
    /// a state has no defined output.
    UnsupportedDimension {
        /// Per-subsystem dimensions of the offending state.
        dims: Vec<usize>,
    },

    /// A renderer was requested under a name the registry does not know.
    UnknownFormat {
        /// The name that was asked for.
        requested: String,
        /// The names the registry would have accepted, in sorted order.
        valid: Vec<String>,
    },

    /// A state vector could not be constructed, or failed validation.
    InvalidState {
        /// InvalidState failure message
        message: String,
    },
}

impl fmt::Display for MistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MistError::UnsupportedDimension { dims } => write!(
                f,
                "Unsupported state-space dimension: misty notation can only render \
                 state vectors over binary subsystems, got dims {:?}",
                dims
            ),
            MistError::UnknownFormat { requested, valid } => write!(
                f,
                "'{}' is not a valid output format. Please choose from: {}",
                requested,
                valid.join(", ")
            ),
            MistError::InvalidState { message } => write!(f, "Invalid State: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for MistError {}
