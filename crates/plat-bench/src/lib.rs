//! Benchmark profiles for plat layout generation.
//!
//! - [`town_profile`]: 10x20 grid with default zone bounds, the demo size
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plat_area::{Area, AreaConfig, GroupingStrategy};
use plat_core::ConfigError;

/// Dimensions plus configuration for one benchmark area.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Rows.
    pub height: u32,
    /// Columns.
    pub width: u32,
    /// Area configuration.
    pub config: AreaConfig,
}

impl Profile {
    /// A fresh, ungenerated area for this profile.
    pub fn build(&self) -> Result<Area, ConfigError> {
        Area::new(self.height, self.width, self.config.clone())
    }

    /// Same profile with a different grouping strategy.
    pub fn with_grouping(mut self, grouping: GroupingStrategy) -> Self {
        self.config.grouping = grouping;
        self
    }
}

/// 10x20 grid with default settings.
pub fn town_profile() -> Profile {
    Profile {
        height: 10,
        width: 20,
        config: AreaConfig::default(),
    }
}

/// 100x100 grid with zones between 2 and 5 cells a side.
pub fn reference_profile() -> Profile {
    Profile {
        height: 100,
        width: 100,
        config: AreaConfig::with_zone_bounds(2, 5),
    }
}

/// 316x316 grid, same zone bounds as [`reference_profile`].
pub fn stress_profile() -> Profile {
    Profile {
        height: 316,
        width: 316,
        ..reference_profile()
    }
}
