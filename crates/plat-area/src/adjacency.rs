//! Neighbour graph: every zone touching a footprint's one-cell ring.

use crate::pass::{Pass, PassContext};
use indexmap::IndexSet;
use plat_core::{CellTag, GenerateError, ZoneId};
use plat_grid::{Grid, Rect};
use smallvec::SmallVec;
use tracing::debug;

pub(crate) struct Adjacency;

impl Pass for Adjacency {
    fn name(&self) -> &'static str {
        "adjacency"
    }

    fn run(&self, ctx: &mut PassContext<'_>) -> Result<(), GenerateError> {
        let ids: Vec<ZoneId> = ctx.zones.ids().collect();
        let mut edges = 0usize;
        for id in ids {
            let Some(footprint) = ctx.zones.get(id).map(|z| z.footprint()) else {
                continue;
            };
            let neighbours = touching_zones(ctx.grid, id, footprint);
            edges += neighbours.len();
            if let Some(zone) = ctx.zones.get_mut(id) {
                zone.set_neighbours(neighbours);
            }
        }
        debug!(zones = ctx.zones.len(), edges, "adjacency complete");
        Ok(())
    }
}

/// Distinct zones found on the ring around `footprint`, in the order the
/// ring visits them, excluding `own`.
pub(crate) fn touching_zones(
    grid: &Grid<CellTag>,
    own: ZoneId,
    footprint: Rect,
) -> SmallVec<[ZoneId; 8]> {
    let seen: IndexSet<ZoneId> = grid
        .border_cells(1, footprint)
        .filter_map(|(_, _, tag)| tag.zone())
        .filter(|&id| id != own)
        .collect();
    seen.into_iter().collect()
}
