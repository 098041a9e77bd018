//! Zones and the registry that owns them.

use indexmap::IndexMap;
use plat_core::{CellTag, GroupId, ZoneId};
use plat_grid::Rect;
use smallvec::SmallVec;

/// A placed rectangular region of an area.
///
/// Position and size are fixed at creation. The neighbour list is filled
/// once by the adjacency pass and the group by the grouping pass; both
/// refer to other zones by id, never by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    id: ZoneId,
    footprint: Rect,
    neighbours: SmallVec<[ZoneId; 8]>,
    group: GroupId,
}

impl Zone {
    pub(crate) fn new(id: ZoneId, footprint: Rect) -> Self {
        Self {
            id,
            footprint,
            neighbours: SmallVec::new(),
            group: GroupId::from(id),
        }
    }

    /// The zone's unique id.
    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// The rectangle of cells the zone covers.
    pub fn footprint(&self) -> Rect {
        self.footprint
    }

    /// Top row of the footprint.
    pub fn y(&self) -> i32 {
        self.footprint.y
    }

    /// Left column of the footprint.
    pub fn x(&self) -> i32 {
        self.footprint.x
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.footprint.height as u32
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.footprint.width as u32
    }

    /// Number of cells covered.
    pub fn area(&self) -> u64 {
        self.footprint.area()
    }

    /// Zones whose footprints touch this one, in discovery order.
    ///
    /// Empty until the adjacency pass has run.
    pub fn neighbours(&self) -> &[ZoneId] {
        &self.neighbours
    }

    /// The group this zone currently belongs to.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// The tag stamped over this zone's footprint.
    pub fn tag(&self) -> Option<CellTag> {
        CellTag::for_zone(self.id)
    }

    pub(crate) fn set_neighbours(&mut self, neighbours: SmallVec<[ZoneId; 8]>) {
        self.neighbours = neighbours;
    }

    pub(crate) fn set_group(&mut self, group: GroupId) {
        self.group = group;
    }
}

/// Insertion-ordered store of every zone in an area.
///
/// Iteration order is creation order, which is the raster order in which
/// the placement pass discovered each zone's anchor cell.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: IndexMap<ZoneId, Zone>,
}

impl ZoneRegistry {
    /// Number of zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zone has been placed.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Look up a zone by id.
    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    /// Whether a zone with `id` exists.
    pub fn contains(&self, id: ZoneId) -> bool {
        self.zones.contains_key(&id)
    }

    /// The zone owning a cell tag, or `None` for empty or unknown tags.
    pub fn resolve(&self, tag: CellTag) -> Option<&Zone> {
        tag.zone().and_then(|id| self.get(id))
    }

    /// Zones in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.values()
    }

    /// Zone ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.keys().copied()
    }

    /// Position of a zone in creation order.
    pub fn index_of(&self, id: ZoneId) -> Option<usize> {
        self.zones.get_index_of(&id)
    }

    /// Members of each group, keyed by group id in order of first
    /// appearance.
    pub fn groups(&self) -> IndexMap<GroupId, Vec<ZoneId>> {
        let mut groups: IndexMap<GroupId, Vec<ZoneId>> = IndexMap::new();
        for zone in self.zones.values() {
            groups.entry(zone.group).or_default().push(zone.id);
        }
        groups
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.groups().len()
    }

    pub(crate) fn insert(&mut self, zone: Zone) {
        self.zones.insert(zone.id, zone);
    }

    pub(crate) fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(&id)
    }
}

impl<'a> IntoIterator for &'a ZoneRegistry {
    type Item = &'a Zone;
    type IntoIter = indexmap::map::Values<'a, ZoneId, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn registry() -> ZoneRegistry {
        let mut r = ZoneRegistry::default();
        r.insert(Zone::new(ZoneId(0), Rect::new(0, 0, 2, 3)));
        r.insert(Zone::new(ZoneId(1), Rect::new(0, 3, 3, 2)));
        r.insert(Zone::new(ZoneId(2), Rect::new(2, 0, 2, 2)));
        r
    }

    #[test]
    fn new_zone_starts_in_own_group() {
        let z = Zone::new(ZoneId(5), Rect::new(1, 2, 3, 4));
        assert_eq!(z.group(), GroupId(5));
        assert!(z.neighbours().is_empty());
        assert_eq!((z.y(), z.x(), z.height(), z.width()), (1, 2, 3, 4));
        assert_eq!(z.area(), 12);
        assert_eq!(z.tag().map(CellTag::raw), Some(6));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let r = registry();
        let ids: Vec<ZoneId> = r.ids().collect();
        assert_eq!(ids, vec![ZoneId(0), ZoneId(1), ZoneId(2)]);
        assert_eq!(r.iter().count(), 3);
        assert_eq!((&r).into_iter().count(), 3);
        assert_eq!(r.index_of(ZoneId(2)), Some(2));
    }

    #[test]
    fn resolve_maps_tags_to_zones() {
        let r = registry();
        let tag = CellTag::for_zone(ZoneId(1)).unwrap();
        assert_eq!(r.resolve(tag).map(Zone::id), Some(ZoneId(1)));
        assert!(r.resolve(CellTag::EMPTY).is_none());
        let unknown = CellTag::for_zone(ZoneId(9)).unwrap();
        assert!(r.resolve(unknown).is_none());
    }

    #[test]
    fn groups_collects_members() {
        let mut r = registry();
        r.get_mut(ZoneId(2)).unwrap().set_group(GroupId(0));
        let groups = r.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&GroupId(0)], vec![ZoneId(0), ZoneId(2)]);
        assert_eq!(groups[&GroupId(1)], vec![ZoneId(1)]);
        assert_eq!(r.group_count(), 2);
    }

    #[test]
    fn neighbours_are_ids() {
        let mut r = registry();
        r.get_mut(ZoneId(0))
            .unwrap()
            .set_neighbours(smallvec![ZoneId(1), ZoneId(2)]);
        assert_eq!(
            r.get(ZoneId(0)).unwrap().neighbours(),
            &[ZoneId(1), ZoneId(2)]
        );
    }
}
