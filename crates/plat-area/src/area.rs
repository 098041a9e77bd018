//! The [`Area`]: grid, zone registry and the generation pipeline.

use crate::adjacency::Adjacency;
use crate::config::AreaConfig;
use crate::grouping::Grouping;
use crate::pass::{Pass, PassContext};
use crate::placement::Placement;
use crate::stats::GenerationStats;
use crate::zone::{Zone, ZoneRegistry};
use indexmap::IndexMap;
use plat_core::{CellTag, ConfigError, GenerateError, GroupId, RandomSource, ZoneId};
use plat_grid::Grid;
use tracing::{debug, info};

/// Passes in execution order. Each consumes the complete output of the
/// previous one.
const PIPELINE: [&dyn Pass; 3] = [&Placement, &Adjacency, &Grouping];

/// What a consumer sees at one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellView {
    /// The cell belongs to no zone.
    Empty,
    /// The cell lies in a zone's footprint.
    Zone {
        /// The zone covering the cell.
        zone: ZoneId,
        /// That zone's group.
        group: GroupId,
    },
}

/// A rectangular grid partitioned into zones and groups.
///
/// Construct with [`Area::new`], then call [`Area::generate`] once.
/// After generation the grid and the registry are read-only.
///
/// # Examples
///
/// ```
/// use plat_area::{Area, AreaConfig, SeededSource};
///
/// let mut area = Area::new(10, 20, AreaConfig::default()).unwrap();
/// let stats = area.generate(&mut SeededSource::new(23)).unwrap();
/// assert_eq!(stats.zones, area.zones().len());
/// for zone in area.zones() {
///     assert!((2..=3).contains(&zone.height()));
///     assert!((2..=3).contains(&zone.width()));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Area {
    grid: Grid<CellTag>,
    zones: ZoneRegistry,
    config: AreaConfig,
    next_zone_id: u32,
    generated: bool,
}

impl Area {
    /// Largest accepted cell count: every zone needs a tag, and tags
    /// reserve one value for the empty sentinel.
    pub const MAX_CELLS: u64 = u32::MAX as u64 - 1;

    /// Create an area of `height * width` empty cells.
    ///
    /// Fails before allocating if the configuration or the dimensions
    /// are invalid.
    pub fn new(height: u32, width: u32, config: AreaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cells = Grid::<CellTag>::check_dimensions(height, width)? as u64;
        if cells > Self::MAX_CELLS {
            return Err(ConfigError::CellCountOverflow {
                value: cells,
                max: Self::MAX_CELLS,
            });
        }
        let grid = Grid::new(height, width, CellTag::EMPTY)?;
        Ok(Self {
            grid,
            zones: ZoneRegistry::default(),
            config,
            next_zone_id: 0,
            generated: false,
        })
    }

    /// Run placement, adjacency and grouping, in that order.
    ///
    /// May only be called once per area; later calls return
    /// [`GenerateError::AlreadyGenerated`] and leave the area untouched.
    /// Identical dimensions, configuration and random sequences produce
    /// identical areas.
    pub fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<GenerationStats, GenerateError> {
        if self.generated {
            return Err(GenerateError::AlreadyGenerated);
        }
        self.generated = true;

        let mut stats = GenerationStats::default();
        let mut ctx = PassContext {
            grid: &mut self.grid,
            zones: &mut self.zones,
            config: &self.config,
            rng,
            stats: &mut stats,
            next_zone_id: &mut self.next_zone_id,
        };
        for pass in PIPELINE {
            debug!(pass = pass.name(), "running pass");
            pass.run(&mut ctx)?;
        }

        stats.empty_cells = self
            .grid
            .row_slices()
            .flatten()
            .filter(|tag| tag.is_empty())
            .count();
        stats.groups = self.zones.group_count();
        info!(
            height = self.grid.height(),
            width = self.grid.width(),
            zones = stats.zones,
            groups = stats.groups,
            empty_cells = stats.empty_cells,
            "area generated"
        );
        Ok(stats)
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// The configuration the area was built with.
    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    /// Whether [`generate`](Self::generate) has been called.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// The tag grid.
    pub fn grid(&self) -> &Grid<CellTag> {
        &self.grid
    }

    /// Every zone, in creation order.
    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// The zone owning `tag`, if any.
    pub fn resolve(&self, tag: CellTag) -> Option<&Zone> {
        self.zones.resolve(tag)
    }

    /// The cell at `(y, x)`, or `None` outside the grid.
    pub fn cell(&self, y: i32, x: i32) -> Option<CellView> {
        self.grid.get(y, x).map(|tag| self.view(tag))
    }

    /// Rows of cells, top to bottom, each left to right.
    pub fn rows(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.grid
            .row_slices()
            .map(move |row| row.iter().map(move |&tag| self.view(tag)))
    }

    /// Members of each group, keyed by group id in order of first
    /// appearance.
    pub fn groups(&self) -> IndexMap<GroupId, Vec<ZoneId>> {
        self.zones.groups()
    }

    fn view(&self, tag: CellTag) -> CellView {
        match self.zones.resolve(tag) {
            Some(zone) => CellView::Zone {
                zone: zone.id(),
                group: zone.group(),
            },
            None => CellView::Empty,
        }
    }
}
