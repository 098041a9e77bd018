//! Strongly-typed identifiers and the [`CellTag`] cell encoding.

use std::fmt;

/// Identifies a zone within an area.
///
/// Zones are assigned sequential IDs in raster discovery order.
/// `ZoneId(n)` is the n-th zone placed; IDs are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ZoneId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a group of zones.
///
/// Every zone starts in the group named after its own [`ZoneId`]; the
/// grouping pass may move it into a neighbour's group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GroupId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<ZoneId> for GroupId {
    fn from(id: ZoneId) -> Self {
        Self(id.0)
    }
}

/// The value stored in every grid cell of an area.
///
/// A tag is either [`CellTag::EMPTY`] or the tag of exactly one zone,
/// encoded as `RESERVED_OFFSET + zone_id`. A cell moves from empty to a
/// zone tag once and never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellTag(u32);

impl CellTag {
    /// The unassigned-cell sentinel.
    pub const EMPTY: CellTag = CellTag(0);

    /// Number of tag values below the first zone tag.
    pub const RESERVED_OFFSET: u32 = 1;

    /// The tag stamped over the footprint of `zone`.
    ///
    /// Returns `None` only for `ZoneId(u32::MAX)`, whose tag would not
    /// fit; areas cap their cell count well below that.
    pub fn for_zone(zone: ZoneId) -> Option<Self> {
        zone.0.checked_add(Self::RESERVED_OFFSET).map(CellTag)
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// The zone this tag belongs to, or `None` for empty cells.
    pub fn zone(self) -> Option<ZoneId> {
        self.0.checked_sub(Self::RESERVED_OFFSET).map(ZoneId)
    }

    /// Raw integer value of the tag.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CellTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_tag_has_no_zone() {
        assert!(CellTag::EMPTY.is_empty());
        assert_eq!(CellTag::EMPTY.zone(), None);
        assert_eq!(CellTag::default(), CellTag::EMPTY);
    }

    #[test]
    fn first_zone_tag_is_one() {
        let tag = CellTag::for_zone(ZoneId(0)).unwrap();
        assert_eq!(tag.raw(), 1);
        assert!(!tag.is_empty());
    }

    #[test]
    fn last_zone_id_does_not_fit() {
        assert_eq!(CellTag::for_zone(ZoneId(u32::MAX)), None);
    }

    #[test]
    fn group_starts_from_zone_id() {
        assert_eq!(GroupId::from(ZoneId(7)), GroupId(7));
    }

    proptest! {
        #[test]
        fn tag_resolves_back_to_zone(id in 0u32..u32::MAX) {
            let tag = CellTag::for_zone(ZoneId(id)).unwrap();
            prop_assert_eq!(tag.zone(), Some(ZoneId(id)));
        }
    }
}
