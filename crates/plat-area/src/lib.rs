//! Zone placement, adjacency and grouping for plat layouts.
//!
//! An [`Area`] owns a [`Grid`](plat_grid::Grid) of [`CellTag`]s and a
//! [`ZoneRegistry`]. [`Area::generate`] runs three passes in strict
//! order, each completing before the next starts:
//!
//! ```text
//! Area::generate
//! ├── placement   raster scan, random rectangles between zone_min and zone_max
//! ├── adjacency   ring of each footprint → neighbour ids
//! └── grouping    each zone may adopt a random neighbour's group
//! ```
//!
//! Zones refer to each other by [`ZoneId`] only; the registry is the
//! single owner of every [`Zone`].
//!
//! [`CellTag`]: plat_core::CellTag
//! [`ZoneId`]: plat_core::ZoneId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod adjacency;
pub mod area;
pub mod config;
mod grouping;
mod pass;
mod placement;
pub mod source;
pub mod stats;
pub mod zone;

pub use area::{Area, CellView};
pub use config::{AreaConfig, GroupingStrategy};
pub use source::SeededSource;
pub use stats::GenerationStats;
pub use zone::{Zone, ZoneRegistry};
