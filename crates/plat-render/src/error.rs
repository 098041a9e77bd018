//! Error types for renderer construction.

use std::error::Error;
use std::fmt;

/// Errors from configuring a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The palette needs one character for empty cells and at least one
    /// for zones.
    PaletteTooShort {
        /// Characters supplied.
        len: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteTooShort { len } => {
                write!(f, "palette has {len} characters, need at least 2")
            }
        }
    }
}

impl Error for RenderError {}
