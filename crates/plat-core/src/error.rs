//! Error types for area construction and generation.
//!
//! Configuration problems are reported by [`ConfigError`] before any
//! generation work starts. [`GenerateError`] covers misuse of an area
//! once it exists. Out-of-bounds grid queries are never errors.

use std::error::Error;
use std::fmt;

/// Errors detected while validating an area's dimensions or configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Height or width is zero.
    EmptyGrid,
    /// A grid dimension exceeds the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"height"` or `"width"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `height * width` exceeds the largest cell count the grid can hold.
    CellCountOverflow {
        /// The requested cell count.
        value: u64,
        /// The largest accepted cell count.
        max: u64,
    },
    /// `zone_min` is zero.
    ZoneMinZero,
    /// `zone_min` is larger than `zone_max`.
    InvalidZoneBounds {
        /// The configured minimum side length.
        min: u32,
        /// The configured maximum side length.
        max: u32,
    },
    /// The adoption chance is above 100 percent.
    AdoptionChanceOutOfRange {
        /// The configured value.
        value: u8,
    },
    /// `max_resample_attempts` is zero.
    ResampleCapZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { value, max } => {
                write!(f, "cell count {value} exceeds maximum {max}")
            }
            Self::ZoneMinZero => write!(f, "zone_min must be at least 1"),
            Self::InvalidZoneBounds { min, max } => {
                write!(f, "zone_min {min} is greater than zone_max {max}")
            }
            Self::AdoptionChanceOutOfRange { value } => {
                write!(f, "adoption_chance must be in [0, 100], got {value}")
            }
            Self::ResampleCapZero => write!(f, "max_resample_attempts must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by `Area::generate()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The area has already been generated; the grid is filled and a
    /// second pass would re-scan it.
    AlreadyGenerated,
    /// Every zone id that still fits a [`CellTag`](crate::CellTag) has
    /// been issued.
    ZoneIdsExhausted,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyGenerated => write!(f, "area has already been generated"),
            Self::ZoneIdsExhausted => write!(f, "no zone ids left to issue"),
        }
    }
}

impl Error for GenerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_values() {
        let e = ConfigError::InvalidZoneBounds { min: 4, max: 2 };
        assert_eq!(e.to_string(), "zone_min 4 is greater than zone_max 2");

        let e = ConfigError::DimensionTooLarge {
            name: "width",
            value: u32::MAX,
            max: i32::MAX as u32,
        };
        assert!(e.to_string().starts_with("width "));

        let e = ConfigError::CellCountOverflow { value: 100, max: 99 };
        assert_eq!(e.to_string(), "cell count 100 exceeds maximum 99");
    }

    #[test]
    fn generate_error_display() {
        assert_eq!(
            GenerateError::AlreadyGenerated.to_string(),
            "area has already been generated"
        );
    }
}
