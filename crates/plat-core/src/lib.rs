//! Core types and traits for the plat layout generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers shared by every other crate (zone ids, group ids and
//! the per-cell tag encoding), the error types raised at construction
//! and generation time, and the [`RandomSource`] abstraction the
//! generation passes draw from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod random;

pub use error::{ConfigError, GenerateError};
pub use id::{CellTag, GroupId, ZoneId};
pub use random::RandomSource;
