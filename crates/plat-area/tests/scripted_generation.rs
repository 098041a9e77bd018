//! Integration test: generation driven by scripted random sources.
//!
//! Pins every size draw, adoption roll and neighbour pick so that the
//! exact zones, neighbours and groups can be asserted.

use plat_area::{Area, AreaConfig, CellView, GroupingStrategy, Zone};
use plat_core::{GenerateError, GroupId};
use plat_grid::Rect;
use plat_test_utils::{check_all, MinSource, ScriptedSource};

fn footprints(area: &Area) -> Vec<Rect> {
    area.zones().iter().map(Zone::footprint).collect()
}

fn groups(area: &Area) -> Vec<GroupId> {
    area.zones().iter().map(Zone::group).collect()
}

/// Eight draws that tile a 4x4 grid with four 2x2 zones.
const TILE_4X4: [u32; 8] = [2; 8];

fn tiled(grouping: GroupingStrategy, grouping_script: &[u32]) -> (Area, ScriptedSource) {
    let mut rng = ScriptedSource::new(TILE_4X4.iter().chain(grouping_script).copied());
    let config = AreaConfig {
        grouping,
        ..AreaConfig::default()
    };
    let mut area = Area::new(4, 4, config).unwrap();
    area.generate(&mut rng).unwrap();
    (area, rng)
}

// ── Placement ────────────────────────────────────────────────────

#[test]
fn height_is_drawn_before_width() {
    let mut rng = ScriptedSource::new([3, 2, 3, 2]);
    let mut area = Area::new(3, 5, AreaConfig::with_zone_bounds(2, 3)).unwrap();
    let stats = area.generate(&mut rng).unwrap();

    assert_eq!(
        footprints(&area),
        vec![Rect::new(0, 0, 3, 2), Rect::new(0, 2, 3, 2)]
    );
    assert_eq!(stats.empty_cells, 3);
    assert_eq!(area.cell(1, 4), Some(CellView::Empty));
    assert_eq!(check_all(&area), Ok(()));
}

#[test]
fn draws_are_clamped_to_free_runs() {
    // Zone 1 anchors at (0,2) where only two columns remain; the scripted
    // width of 3 is clamped to 2.
    let mut rng = ScriptedSource::new([2, 2, 3, 3]);
    let mut area = Area::new(4, 4, AreaConfig::with_zone_bounds(2, 3)).unwrap();
    area.generate(&mut rng).unwrap();

    assert_eq!(footprints(&area)[..2], [Rect::new(0, 0, 2, 2), Rect::new(0, 2, 3, 2)]);
    assert_eq!(check_all(&area), Ok(()));
}

#[test]
fn anchors_follow_raster_order() {
    let mut rng = ScriptedSource::new([2, 2, 3, 2, 2, 2]);
    let mut area = Area::new(4, 4, AreaConfig::with_zone_bounds(2, 3)).unwrap();
    let stats = area.generate(&mut rng).unwrap();

    assert_eq!(
        footprints(&area),
        vec![
            Rect::new(0, 0, 2, 2),
            Rect::new(0, 2, 3, 2),
            Rect::new(2, 0, 2, 2),
        ]
    );
    // (3,2) and (3,3) form a one-row pocket.
    assert_eq!(stats.zones, 3);
    assert_eq!(stats.empty_cells, 2);
    assert_eq!(stats.size_draws, 3);
    assert_eq!(stats.fallbacks, 0);
}

#[test]
fn unit_zone_then_tall_zone() {
    let mut rng = ScriptedSource::new([1, 1, 3, 2, 2, 1]);
    let mut area = Area::new(3, 3, AreaConfig::with_zone_bounds(1, 3)).unwrap();
    let stats = area.generate(&mut rng).unwrap();

    assert_eq!(
        footprints(&area),
        vec![
            Rect::new(0, 0, 1, 1),
            Rect::new(0, 1, 3, 2),
            Rect::new(1, 0, 2, 1),
        ]
    );
    assert_eq!(stats.empty_cells, 0);
    assert_eq!(check_all(&area), Ok(()));
}

#[test]
fn exhausted_script_falls_back_to_low_end() {
    let mut rng = ScriptedSource::new([2, 3]);
    let mut area = Area::new(4, 3, AreaConfig::with_zone_bounds(2, 3)).unwrap();
    area.generate(&mut rng).unwrap();

    assert_eq!(
        footprints(&area),
        vec![Rect::new(0, 0, 2, 3), Rect::new(2, 0, 2, 2)]
    );
    assert_eq!(area.cell(3, 2), Some(CellView::Empty));
}

// ── Grouping ─────────────────────────────────────────────────────

#[test]
fn failed_rolls_draw_no_neighbour() {
    // Zone 0 fails (100 > 60). Zone 1 succeeds and picks index 2 of
    // [2, 3, 0]. Zone 2 fails (61). Zone 3 succeeds on exactly 60 and
    // picks index 1 of [0, 1, 2], whose group is already 0.
    let (area, rng) = tiled(GroupingStrategy::Relaxation, &[100, 1, 2, 61, 60, 1]);
    assert_eq!(groups(&area), vec![GroupId(0), GroupId(0), GroupId(2), GroupId(0)]);
    assert_eq!(rng.remaining(), 0);
    assert_eq!(rng.draws(), 8 + 6);
}

#[test]
fn relaxation_is_order_dependent() {
    // Zone 0 adopts 2's group, zones 1 and 2 keep theirs, zone 3 adopts
    // zone 0's group as it stands after zone 0 changed it.
    let (area, _) = tiled(GroupingStrategy::Relaxation, &[1, 0, 100, 100, 1, 0]);
    assert_eq!(groups(&area), vec![GroupId(2), GroupId(1), GroupId(2), GroupId(2)]);
    assert_eq!(area.groups().len(), 2);
}

#[test]
fn union_find_merges_the_same_decisions() {
    // Same draws as above: edges 0-2 and 3-0 form one component named 0.
    let (area, rng) = tiled(GroupingStrategy::UnionFind, &[1, 0, 100, 100, 1, 0]);
    assert_eq!(groups(&area), vec![GroupId(0), GroupId(1), GroupId(0), GroupId(0)]);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn both_strategies_consume_the_same_draws() {
    let script = [1, 2, 1, 0, 1, 1, 100];
    let (_, relaxed) = tiled(GroupingStrategy::Relaxation, &script);
    let (_, merged) = tiled(GroupingStrategy::UnionFind, &script);
    assert_eq!(relaxed.draws(), merged.draws());
}

#[test]
fn zone_without_neighbours_keeps_its_group() {
    // One 2x2 zone in a 3x3 grid; the rest is too thin for another.
    let mut rng = ScriptedSource::new([2, 2, 1]);
    let mut area = Area::new(
        3,
        3,
        AreaConfig {
            adoption_chance: 100,
            ..AreaConfig::with_zone_bounds(2, 3)
        },
    )
    .unwrap();
    let stats = area.generate(&mut rng).unwrap();
    assert_eq!(stats.zones, 1);
    assert_eq!(stats.adoptions, 0);
    assert_eq!(groups(&area), vec![GroupId(0)]);
    // The roll is drawn, the pick is not.
    assert_eq!(rng.draws(), 3);
}

#[test]
fn regenerating_is_an_error() {
    let mut area = Area::new(4, 4, AreaConfig::default()).unwrap();
    area.generate(&mut MinSource).unwrap();
    assert_eq!(
        area.generate(&mut MinSource),
        Err(GenerateError::AlreadyGenerated)
    );
    assert_eq!(area.zones().len(), 4);
}
