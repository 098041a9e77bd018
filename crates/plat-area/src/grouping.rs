//! Grouping: each zone, in creation order, may adopt the group of one of
//! its neighbours.

use crate::config::GroupingStrategy;
use crate::pass::{Pass, PassContext};
use crate::zone::ZoneRegistry;
use plat_core::{GenerateError, GroupId, RandomSource, ZoneId};
use tracing::debug;

pub(crate) struct Grouping;

impl Pass for Grouping {
    fn name(&self) -> &'static str {
        "grouping"
    }

    fn run(&self, ctx: &mut PassContext<'_>) -> Result<(), GenerateError> {
        let chance = ctx.config.adoption_chance;
        let adoptions = match ctx.config.grouping {
            GroupingStrategy::Relaxation => relax(ctx.zones, &mut *ctx.rng, chance),
            GroupingStrategy::UnionFind => {
                let edges = adoption_edges(ctx.zones, &mut *ctx.rng, chance);
                union_groups(ctx.zones, &edges);
                edges.len()
            }
        };
        ctx.stats.adoptions = adoptions;
        debug!(
            adoptions,
            strategy = ?ctx.config.grouping,
            "grouping complete"
        );
        Ok(())
    }
}

/// Pick the neighbour `id` adopts from, if any.
///
/// Rolls the adoption chance first; the neighbour draw only happens when
/// the roll succeeds and the zone has neighbours.
fn pick_neighbour(
    zones: &ZoneRegistry,
    rng: &mut dyn RandomSource,
    chance: u8,
    id: ZoneId,
) -> Option<ZoneId> {
    if !rng.roll(chance) {
        return None;
    }
    let neighbours = zones.get(id)?.neighbours();
    let pick = rng.choose(neighbours.len())?;
    neighbours.get(pick).copied()
}

/// Single forward pass: the adopted group is the neighbour's group at the
/// moment of adoption, so earlier adoptions propagate into later ones.
fn relax(zones: &mut ZoneRegistry, rng: &mut dyn RandomSource, chance: u8) -> usize {
    let ids: Vec<ZoneId> = zones.ids().collect();
    let mut adoptions = 0;
    for id in ids {
        let Some(neighbour) = pick_neighbour(zones, rng, chance, id) else {
            continue;
        };
        let Some(group) = zones.get(neighbour).map(|z| z.group()) else {
            continue;
        };
        if let Some(zone) = zones.get_mut(id) {
            zone.set_group(group);
            adoptions += 1;
        }
    }
    adoptions
}

fn adoption_edges(
    zones: &ZoneRegistry,
    rng: &mut dyn RandomSource,
    chance: u8,
) -> Vec<(ZoneId, ZoneId)> {
    let ids: Vec<ZoneId> = zones.ids().collect();
    ids.into_iter()
        .filter_map(|id| pick_neighbour(zones, rng, chance, id).map(|n| (id, n)))
        .collect()
}

/// Merge adoption edges and name each component after its smallest id.
fn union_groups(zones: &mut ZoneRegistry, edges: &[(ZoneId, ZoneId)]) {
    let ids: Vec<ZoneId> = zones.ids().collect();
    let mut parent: Vec<usize> = (0..ids.len()).collect();

    for &(a, b) in edges {
        let (Some(a), Some(b)) = (zones.index_of(a), zones.index_of(b)) else {
            continue;
        };
        let ra = find(&mut parent, a);
        let rb = find(&mut parent, b);
        if ra == rb {
            continue;
        }
        // Keep the root with the smaller zone id.
        if ids[ra] < ids[rb] {
            parent[rb] = ra;
        } else {
            parent[ra] = rb;
        }
    }

    for (index, &id) in ids.iter().enumerate() {
        let root = find(&mut parent, index);
        if let Some(zone) = zones.get_mut(id) {
            zone.set_group(GroupId::from(ids[root]));
        }
    }
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    let mut root = i;
    while parent[root] != root {
        root = parent[root];
    }
    while parent[i] != root {
        let next = parent[i];
        parent[i] = root;
        i = next;
    }
    root
}
