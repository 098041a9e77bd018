//! The generation pass trait and the context each pass runs against.

use crate::config::AreaConfig;
use crate::stats::GenerationStats;
use crate::zone::ZoneRegistry;
use plat_core::{CellTag, GenerateError, RandomSource, ZoneId};
use plat_grid::Grid;

/// One stage of [`Area::generate`](crate::Area::generate).
///
/// Passes are stateless; everything they read or write goes through the
/// [`PassContext`]. Each pass must run to completion before the next one
/// starts, since it consumes the complete output of its predecessor.
pub(crate) trait Pass {
    /// Name used in log output.
    fn name(&self) -> &'static str;

    /// Run the pass over the whole area.
    fn run(&self, ctx: &mut PassContext<'_>) -> Result<(), GenerateError>;
}

/// Borrowed view of an area's state during generation.
///
/// Fields are public to the crate so passes can borrow the grid and the
/// registry independently.
pub(crate) struct PassContext<'a> {
    pub(crate) grid: &'a mut Grid<CellTag>,
    pub(crate) zones: &'a mut ZoneRegistry,
    pub(crate) config: &'a AreaConfig,
    pub(crate) rng: &'a mut dyn RandomSource,
    pub(crate) stats: &'a mut GenerationStats,
    pub(crate) next_zone_id: &'a mut u32,
}

impl PassContext<'_> {
    /// Issue the next zone id. Ids are handed out once, in order.
    pub(crate) fn allocate_zone_id(&mut self) -> Result<ZoneId, GenerateError> {
        let id = ZoneId(*self.next_zone_id);
        *self.next_zone_id = self
            .next_zone_id
            .checked_add(1)
            .ok_or(GenerateError::ZoneIdsExhausted)?;
        Ok(id)
    }
}
