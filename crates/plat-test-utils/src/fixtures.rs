//! Invariant checkers for generated areas.
//!
//! Each checker returns `Err` with a description of the first violation
//! found, so they slot into both `assert!`-style unit tests and
//! `prop_assert!`-style property tests:
//!
//! - [`check_no_overlap`]: zone footprints are pairwise disjoint.
//! - [`check_tags_match_footprints`]: grid tags and footprints agree.
//! - [`check_zone_sizes`]: every side within `[zone_min, zone_max]`.
//! - [`check_coverage_bound`]: no empty pocket could still hold a zone.
//! - [`check_neighbour_symmetry`]: adjacency is symmetric.
//! - [`check_groups_resolve`]: every group names a placed zone.

use plat_area::Area;
use plat_core::{CellTag, ZoneId};
use plat_grid::Rect;

pub fn check_no_overlap(area: &Area) -> Result<(), String> {
    let zones: Vec<_> = area.zones().iter().collect();
    for (i, a) in zones.iter().enumerate() {
        for b in &zones[i + 1..] {
            if a.footprint().intersects(&b.footprint()) {
                return Err(format!(
                    "zones {} {:?} and {} {:?} overlap",
                    a.id(),
                    a.footprint(),
                    b.id(),
                    b.footprint()
                ));
            }
        }
    }
    Ok(())
}

pub fn check_tags_match_footprints(area: &Area) -> Result<(), String> {
    let grid = area.grid();
    for zone in area.zones() {
        let tag = zone
            .tag()
            .ok_or_else(|| format!("zone {} has no tag", zone.id()))?;
        for (y, x, cell) in grid.cells(zone.footprint()) {
            if cell != tag {
                return Err(format!(
                    "cell ({y},{x}) in zone {} carries tag {cell}",
                    zone.id()
                ));
            }
        }
        let covered = grid.cells(grid.bounds()).filter(|&(_, _, c)| c == tag).count() as u64;
        if covered != zone.area() {
            return Err(format!(
                "zone {} tags {covered} cells but covers {}",
                zone.id(),
                zone.area()
            ));
        }
    }
    for (y, x, cell) in grid.cells(grid.bounds()) {
        if cell == CellTag::EMPTY {
            continue;
        }
        match area.resolve(cell) {
            Some(zone) if zone.footprint().contains(y, x) => {}
            Some(zone) => {
                return Err(format!(
                    "cell ({y},{x}) tagged for zone {} outside its footprint",
                    zone.id()
                ))
            }
            None => return Err(format!("cell ({y},{x}) carries unknown tag {cell}")),
        }
    }
    Ok(())
}

pub fn check_zone_sizes(area: &Area) -> Result<(), String> {
    let config = area.config();
    let bounds = config.zone_min..=config.zone_max;
    for zone in area.zones() {
        if !bounds.contains(&zone.height()) || !bounds.contains(&zone.width()) {
            return Err(format!(
                "zone {} is {}x{}, outside [{}, {}]",
                zone.id(),
                zone.height(),
                zone.width(),
                config.zone_min,
                config.zone_max
            ));
        }
    }
    Ok(())
}

/// Every empty cell must have fewer than `zone_min` free cells either
/// downward or rightward (counting itself).
pub fn check_coverage_bound(area: &Area) -> Result<(), String> {
    let grid = area.grid();
    let zone_min = area.config().zone_min;
    let reach = i32::try_from(zone_min).unwrap_or(i32::MAX);
    let run = |rect: Rect| {
        grid.cells(rect)
            .take_while(|&(_, _, c)| c == CellTag::EMPTY)
            .count() as u32
    };
    for (y, x, cell) in grid.cells(grid.bounds()) {
        if cell != CellTag::EMPTY {
            continue;
        }
        let down = run(Rect::new(y, x, reach, 1));
        let right = run(Rect::new(y, x, 1, reach));
        if down >= zone_min && right >= zone_min {
            return Err(format!(
                "empty cell ({y},{x}) has free runs {down} down and {right} right"
            ));
        }
    }
    Ok(())
}

pub fn check_neighbour_symmetry(area: &Area) -> Result<(), String> {
    let zones = area.zones();
    for zone in zones {
        for &other in zone.neighbours() {
            if other == zone.id() {
                return Err(format!("zone {} lists itself as a neighbour", zone.id()));
            }
            let back = zones
                .get(other)
                .ok_or_else(|| format!("zone {} lists unknown neighbour {other}", zone.id()))?;
            if !back.neighbours().contains(&zone.id()) {
                return Err(format!(
                    "zone {other} is a neighbour of {} but not the reverse",
                    zone.id()
                ));
            }
        }
    }
    Ok(())
}

pub fn check_groups_resolve(area: &Area) -> Result<(), String> {
    for zone in area.zones() {
        if !area.zones().contains(ZoneId(zone.group().0)) {
            return Err(format!(
                "zone {} is in group {} which names no zone",
                zone.id(),
                zone.group()
            ));
        }
    }
    Ok(())
}

/// Run every checker, stopping at the first failure.
pub fn check_all(area: &Area) -> Result<(), String> {
    check_no_overlap(area)?;
    check_tags_match_footprints(area)?;
    check_zone_sizes(area)?;
    check_coverage_bound(area)?;
    check_neighbour_symmetry(area)?;
    check_groups_resolve(area)
}
