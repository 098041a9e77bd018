//! Per-generation counters.

/// Summary of one [`Area::generate`](crate::Area::generate) run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Zones placed.
    pub zones: usize,
    /// Cells left unassigned after placement.
    pub empty_cells: usize,
    /// Zone size draws made, including rejected ones.
    pub size_draws: u64,
    /// Anchors where the draw cap was hit and the minimum size was used.
    pub fallbacks: u32,
    /// Zones that adopted a neighbour's group.
    pub adoptions: usize,
    /// Distinct groups after grouping.
    pub groups: usize,
}
