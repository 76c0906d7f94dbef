//! The shared play surface and its copy-on-branch operations
//!
//! A layout keeps a running count of groups that are not yet strictly valid,
//! so completeness is an O(1) query no matter how many groups it holds.

use crate::algorithm::cache::ValidityCache;
use crate::board::group::Group;
use crate::board::tile::Tile;
use crate::io::error::{AlgorithmError, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Ordered groups on the board plus incremental bookkeeping
#[derive(Clone, Debug, Default)]
pub struct Layout {
    groups: Vec<Group>,
    tiles: Vec<Tile>,
    partial_groups: usize,
}

/// Frozen snapshot of a layout used as a hash key
///
/// Taken once when a state enters a hash-based set, so later mutation of the
/// source layout can never corrupt the set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey(Vec<Vec<Tile>>);

impl Layout {
    /// Create an empty layout
    pub const fn new() -> Self {
        Self {
            groups: Vec::new(),
            tiles: Vec::new(),
            partial_groups: 0,
        }
    }

    /// Build a layout from groups in the given order
    pub fn from_groups(groups: impl IntoIterator<Item = Group>, cache: &mut ValidityCache) -> Self {
        let mut layout = Self::new();
        for group in groups {
            layout.append_group(group, cache);
        }
        layout
    }

    /// Groups in placement order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Every tile on the layout, in the order they were placed
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of groups that are not strictly valid
    pub const fn partial_groups(&self) -> usize {
        self.partial_groups
    }

    /// True when every group is a finished run or set
    pub const fn is_complete(&self) -> bool {
        self.partial_groups == 0
    }

    /// True when no group has been placed
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Lazily yield, in ascending order, every group index that can take `tile`
    pub fn places_for<'a>(
        &'a self,
        tile: Tile,
        partial: bool,
        cache: &'a mut ValidityCache,
    ) -> impl Iterator<Item = usize> + 'a {
        self.groups
            .iter()
            .enumerate()
            .filter(move |(_, group)| group.can_accept(tile, partial, cache))
            .map(|(index, _)| index)
    }

    /// One independent copy per legal position for `tile`
    ///
    /// The receiver is never modified.
    pub fn branch(&self, tile: Tile, partial: bool, cache: &mut ValidityCache) -> Vec<Self> {
        let places: Vec<usize> = self.places_for(tile, partial, cache).collect();

        let mut branches = Vec::with_capacity(places.len());
        for index in places {
            let mut next = self.clone();
            if next.append_tile_at(tile, index, cache).is_ok() {
                branches.push(next);
            }
        }
        branches
    }

    /// Copy of the layout with `tile` starting a new group of its own
    pub fn with_singleton(&self, tile: Tile, cache: &mut ValidityCache) -> Self {
        let mut next = self.clone();
        next.append_group(Group::from_tiles([tile]), cache);
        next
    }

    /// Append `tile` to the group at `index`, updating the partial count
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidGroupIndex`] when no group sits at `index`
    ///
    /// # Panics
    ///
    /// Panics if the append turns a valid group into an invalid one. Appends
    /// are only offered after a successful acceptance check, so reaching this
    /// is a defect in the caller rather than a property of the tiles.
    pub fn append_tile_at(
        &mut self,
        tile: Tile,
        index: usize,
        cache: &mut ValidityCache,
    ) -> Result<()> {
        let group_count = self.groups.len();
        let group = self
            .groups
            .get_mut(index)
            .ok_or(AlgorithmError::InvalidGroupIndex { index, group_count })?;

        let was_complete = group.is_complete(cache);
        group.append(tile);
        let now_complete = group.is_complete(cache);

        assert!(
            !was_complete || now_complete,
            "appending {tile} broke the finished group at index {index}"
        );

        if !was_complete && now_complete {
            self.partial_groups -= 1;
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Add a whole group at the end of the layout
    pub fn append_group(&mut self, mut group: Group, cache: &mut ValidityCache) {
        if !group.is_complete(cache) {
            self.partial_groups += 1;
        }
        self.tiles.extend_from_slice(group.tiles());
        self.groups.push(group);
    }

    /// Frozen hash key, optionally ignoring group order
    pub fn key(&self, canonical_order: bool) -> LayoutKey {
        let mut groups: Vec<Vec<Tile>> = self
            .groups
            .iter()
            .map(|group| group.tiles().to_vec())
            .collect();
        if canonical_order {
            groups.sort_unstable();
        }
        LayoutKey(groups)
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl Eq for Layout {}

impl Hash for Layout {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.groups.hash(state);
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board:")?;
        if self.groups.is_empty() {
            return write!(f, " (empty)");
        }
        for group in &self.groups {
            write!(f, "\n\t{group}")?;
        }
        Ok(())
    }
}
