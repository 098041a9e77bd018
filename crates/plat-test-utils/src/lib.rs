//! Test utilities for plat development.
//!
//! Provides scripted [`RandomSource`] implementations that pin every
//! decision the generator makes, and invariant checkers (in
//! [`fixtures`]) that validate a generated [`Area`](plat_area::Area).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use plat_core::RandomSource;

pub use fixtures::{
    check_all, check_coverage_bound, check_groups_resolve, check_neighbour_symmetry,
    check_no_overlap, check_tags_match_footprints, check_zone_sizes,
};

/// Always answers with the low end of the requested range.
///
/// Every roll with a non-zero chance succeeds and every pick is the
/// first candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinSource;

impl RandomSource for MinSource {
    fn range_inclusive(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// Always answers with the high end of the requested range.
///
/// Every roll below 100 percent fails and every pick is the last
/// candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxSource;

impl RandomSource for MaxSource {
    fn range_inclusive(&mut self, _low: u32, high: u32) -> u32 {
        high
    }
}

/// Plays back a fixed sequence of draws.
///
/// Each draw is clamped into the requested range. Once the script runs
/// out, every further draw returns the low end of the range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<u32>,
    draws: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws served so far, scripted or not.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.draws += 1;
        match self.script.pop_front() {
            Some(v) => v.clamp(low, high.max(low)),
            None => low,
        }
    }
}
