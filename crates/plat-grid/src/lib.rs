//! Fixed-size 2D grid storage for plat layouts.
//!
//! [`Grid`] is a row-major array of cell values allocated once at
//! construction. Every rectangular query takes a [`Rect`] that may reach
//! past the grid edges or have a non-positive size: queries are clamped
//! to the grid bounds and degrade to empty results instead of failing.
//!
//! # Queries
//!
//! - [`Grid::cells`]: row-major iteration over a clamped rectangle
//! - [`Grid::set`]: in-place write over a clamped rectangle
//! - [`Grid::border_cells`]: the ring of a rectangle expanded by an offset
//! - [`Grid::extents`]: bounding box of all non-empty cells

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod rect;

pub use error::GridError;
pub use grid::{Cells, Grid};
pub use rect::Rect;
