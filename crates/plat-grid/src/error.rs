//! Error types for grid construction.

use plat_core::ConfigError;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"height"` or `"width"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// `height * width` cells of the cell type would not fit in memory
    /// addressable by one allocation.
    TooManyCells {
        /// The requested cell count.
        value: u64,
        /// The largest accepted cell count for the cell type.
        max: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::TooManyCells { value, max } => {
                write!(f, "cell count {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::EmptyGrid => ConfigError::EmptyGrid,
            GridError::DimensionTooLarge { name, value, max } => {
                ConfigError::DimensionTooLarge { name, value, max }
            }
            GridError::TooManyCells { value, max } => {
                ConfigError::CellCountOverflow { value, max }
            }
        }
    }
}
