//! Text and HTML renderers for generated plat areas.
//!
//! Renderers only read an [`Area`](plat_area::Area); they never mutate
//! it and never draw random numbers.
//!
//! - [`TextRenderer`]: one character per cell, optional border, ANSI
//!   colour keyed on the zone's group.
//! - [`render_html`]: a styled `<table>` with one cell per grid cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod html;
pub mod text;

pub use error::RenderError;
pub use html::render_html;
pub use text::{render_text, TextRenderer, TextView};
