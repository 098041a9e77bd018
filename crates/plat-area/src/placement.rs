//! Zone placement: raster scan, anchoring a random rectangle at every
//! empty cell that can still hold a `zone_min × zone_min` zone.

use crate::pass::{Pass, PassContext};
use crate::zone::Zone;
use plat_core::{CellTag, GenerateError};
use plat_grid::{Grid, Rect};
use tracing::{debug, trace, warn};

pub(crate) struct Placement;

impl Pass for Placement {
    fn name(&self) -> &'static str {
        "placement"
    }

    fn run(&self, ctx: &mut PassContext<'_>) -> Result<(), GenerateError> {
        let zone_min = ctx.config.zone_min;
        let zone_max = ctx.config.zone_max;
        let height = ctx.grid.height() as i32;
        let width = ctx.grid.width() as i32;

        for y in 0..height {
            for x in 0..width {
                // Cells covered by a zone anchored earlier in this scan are skipped.
                if ctx.grid.get(y, x) != Some(CellTag::EMPTY) {
                    continue;
                }
                let (max_height, max_width) = free_run(ctx.grid, y, x, zone_max);
                if max_height < zone_min || max_width < zone_min {
                    continue;
                }
                let footprint = sample_footprint(ctx, y, x, max_height, max_width);
                let id = ctx.allocate_zone_id()?;
                let tag = CellTag::for_zone(id).ok_or(GenerateError::ZoneIdsExhausted)?;
                ctx.grid.set(tag, footprint);
                ctx.zones.insert(Zone::new(id, footprint));
                ctx.stats.zones += 1;
                trace!(
                    zone = %id,
                    y,
                    x,
                    height = footprint.height,
                    width = footprint.width,
                    "zone placed"
                );
            }
        }

        debug!(
            zones = ctx.stats.zones,
            size_draws = ctx.stats.size_draws,
            fallbacks = ctx.stats.fallbacks,
            "placement complete"
        );
        Ok(())
    }
}

/// Empty cells reachable from `(y, x)` going down and going right.
///
/// Each axis is scanned independently for at most `limit` cells and stops
/// at the first occupied cell or the grid edge. The two lengths bound a
/// zone's height and width separately, not jointly.
pub(crate) fn free_run(grid: &Grid<CellTag>, y: i32, x: i32, limit: u32) -> (u32, u32) {
    let limit = i32::try_from(limit).unwrap_or(i32::MAX);
    let down = grid
        .cells(Rect::new(y, x, limit, 1))
        .take_while(|&(_, _, tag)| tag.is_empty())
        .count();
    let right = grid
        .cells(Rect::new(y, x, 1, limit))
        .take_while(|&(_, _, tag)| tag.is_empty())
        .count();
    (down as u32, right as u32)
}

/// Draw a height then a width, redrawing while the rectangle at `(y, x)`
/// overlaps a zone or either side falls outside `[zone_min, max]`.
///
/// After `max_resample_attempts` draws the `zone_min × zone_min`
/// rectangle is used. It is always free: both free runs from `(y, x)`
/// reach at least `zone_min`.
fn sample_footprint(
    ctx: &mut PassContext<'_>,
    y: i32,
    x: i32,
    max_height: u32,
    max_width: u32,
) -> Rect {
    let zone_min = ctx.config.zone_min;
    for _ in 0..ctx.config.max_resample_attempts {
        let height = ctx.rng.range_inclusive(zone_min, max_height);
        let width = ctx.rng.range_inclusive(zone_min, max_width);
        ctx.stats.size_draws += 1;
        // Out-of-range draws are rejected, never clamped.
        if height < zone_min || height > max_height || width < zone_min || width > max_width {
            continue;
        }
        let candidate = Rect::new(y, x, height as i32, width as i32);
        if ctx.grid.cells(candidate).all(|(_, _, tag)| tag.is_empty()) {
            return candidate;
        }
    }
    warn!(
        y,
        x,
        attempts = ctx.config.max_resample_attempts,
        "zone size draw cap reached; using minimum size"
    );
    ctx.stats.fallbacks += 1;
    Rect::new(y, x, zone_min as i32, zone_min as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plat_core::ZoneId;

    fn tag(id: u32) -> CellTag {
        CellTag::for_zone(ZoneId(id)).unwrap()
    }

    #[test]
    fn free_run_open_grid_is_limited() {
        let g = Grid::new(10, 10, CellTag::EMPTY).unwrap();
        assert_eq!(free_run(&g, 0, 0, 3), (3, 3));
    }

    #[test]
    fn free_run_stops_at_edge() {
        let g = Grid::new(4, 5, CellTag::EMPTY).unwrap();
        assert_eq!(free_run(&g, 2, 3, 3), (2, 2));
    }

    #[test]
    fn free_run_stops_at_occupied_cell() {
        let mut g = Grid::new(6, 6, CellTag::EMPTY).unwrap();
        g.set(tag(0), Rect::new(2, 0, 1, 1));
        g.set(tag(1), Rect::new(0, 1, 1, 1));
        assert_eq!(free_run(&g, 0, 0, 3), (2, 1));
    }

    #[test]
    fn free_run_axes_are_independent() {
        // The diagonal cell is occupied but neither scan sees it.
        let mut g = Grid::new(6, 6, CellTag::EMPTY).unwrap();
        g.set(tag(0), Rect::new(1, 1, 1, 1));
        assert_eq!(free_run(&g, 0, 0, 3), (3, 3));
    }
}
