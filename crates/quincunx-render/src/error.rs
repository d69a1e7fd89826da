//! Error types for renderer construction.

use std::fmt;

/// Errors arising from renderer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Column spacing must be odd so pegs centre between the pegs above.
    InvalidSpacing {
        /// The rejected spacing.
        value: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing { value } => {
                write!(f, "x spacing must be an odd number, got {value}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
