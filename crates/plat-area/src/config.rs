//! Area configuration and validation.

use plat_core::ConfigError;

/// How the grouping pass turns adoption decisions into groups.
///
/// Both strategies consume the random source identically, so the same
/// seed makes the same adoption decisions under either one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// Single forward pass in creation order: an adopting zone copies its
    /// neighbour's group *as it is at that moment*. Order-dependent and
    /// non-transitive.
    #[default]
    Relaxation,
    /// Adoption decisions are merged with a union-find; every zone in an
    /// adoption-connected component gets the smallest zone id of that
    /// component as its group.
    UnionFind,
}

/// Configuration for an [`Area`](crate::Area).
///
/// Validated by [`Area::new`](crate::Area::new); all values are
/// immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaConfig {
    /// Minimum zone side length. Default: 2. Must be at least 1.
    pub zone_min: u32,

    /// Maximum zone side length. Default: 3. Must be at least `zone_min`.
    pub zone_max: u32,

    /// Percent chance that a zone adopts a neighbour's group. Default: 60.
    pub adoption_chance: u8,

    /// Draws allowed when sampling a zone size before falling back to a
    /// `zone_min × zone_min` zone. Default: 10 000.
    ///
    /// The fallback rectangle is always free, so the cap only guards
    /// against pathological random sources.
    pub max_resample_attempts: u32,

    /// Grouping strategy. Default: [`GroupingStrategy::Relaxation`].
    pub grouping: GroupingStrategy,
}

impl AreaConfig {
    /// Default minimum zone side length.
    pub const DEFAULT_ZONE_MIN: u32 = 2;

    /// Default maximum zone side length.
    pub const DEFAULT_ZONE_MAX: u32 = 3;

    /// Default adoption chance, in percent.
    pub const DEFAULT_ADOPTION_CHANCE: u8 = 60;

    /// Default cap on zone size draws per anchor cell.
    pub const DEFAULT_MAX_RESAMPLE_ATTEMPTS: u32 = 10_000;

    /// Create a config with the given zone side bounds and defaults for
    /// everything else.
    pub fn with_zone_bounds(zone_min: u32, zone_max: u32) -> Self {
        Self {
            zone_min,
            zone_max,
            ..Self::default()
        }
    }

    /// Check the structural invariants of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zone_min == 0 {
            return Err(ConfigError::ZoneMinZero);
        }
        if self.zone_min > self.zone_max {
            return Err(ConfigError::InvalidZoneBounds {
                min: self.zone_min,
                max: self.zone_max,
            });
        }
        if self.adoption_chance > 100 {
            return Err(ConfigError::AdoptionChanceOutOfRange {
                value: self.adoption_chance,
            });
        }
        if self.max_resample_attempts == 0 {
            return Err(ConfigError::ResampleCapZero);
        }
        Ok(())
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            zone_min: Self::DEFAULT_ZONE_MIN,
            zone_max: Self::DEFAULT_ZONE_MAX,
            adoption_chance: Self::DEFAULT_ADOPTION_CHANCE,
            max_resample_attempts: Self::DEFAULT_MAX_RESAMPLE_ATTEMPTS,
            grouping: GroupingStrategy::Relaxation,
        }
    }
}
