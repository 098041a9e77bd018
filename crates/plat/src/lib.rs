//! Plat: procedural town-block layouts on a rectangular grid.
//!
//! This is the facade crate that re-exports the public API of the plat
//! sub-crates. Most users only need `plat` as a dependency.
//!
//! # Quick start
//!
//! ```rust
//! use plat::prelude::*;
//!
//! let mut area = Area::new(10, 20, AreaConfig::default()).unwrap();
//! let stats = area.generate(&mut SeededSource::new(23)).unwrap();
//!
//! // Every zone is between 2 and 3 cells on each side and names its
//! // neighbours by id.
//! for zone in area.zones() {
//!     assert!((2..=3).contains(&zone.height()));
//!     for &other in zone.neighbours() {
//!         assert!(area.zones().get(other).unwrap().neighbours().contains(&zone.id()));
//!     }
//! }
//! assert_eq!(stats.groups, area.groups().len());
//!
//! let text = TextRenderer::new().colour(false).render(&area);
//! assert_eq!(text.lines().count(), 10);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plat-core` | Ids, cell tags, errors, the `RandomSource` trait |
//! | [`grid`] | `plat-grid` | `Grid<T>`, `Rect` and clamped iteration |
//! | [`area`] | `plat-area` | `Area`, zones, configuration, generation passes |
//! | [`render`] | `plat-render` | Text and HTML renderers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, cell tags, error types and the random source trait (`plat-core`).
pub use plat_core as types;

/// Rectangular grid storage and clamped rectangle iteration (`plat-grid`).
pub use plat_grid as grid;

/// Area generation: placement, adjacency and grouping (`plat-area`).
///
/// [`area::Area`] is the entry point; [`area::SeededSource`] gives
/// reproducible layouts from a `u64` seed.
pub use plat_area as area;

/// Text and HTML renderers (`plat-render`).
pub use plat_render as render;

/// Common imports for typical plat usage.
pub mod prelude {
    // Core
    pub use plat_core::{CellTag, GroupId, RandomSource, ZoneId};

    // Errors
    pub use plat_core::{ConfigError, GenerateError};

    // Grid
    pub use plat_grid::{Grid, Rect};

    // Area
    pub use plat_area::{
        Area, AreaConfig, CellView, GenerationStats, GroupingStrategy, SeededSource, Zone,
        ZoneRegistry,
    };

    // Rendering
    pub use plat_render::{render_html, render_text, RenderError, TextRenderer};
}
