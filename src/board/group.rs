//! A single run or set on the layout

use crate::algorithm::cache::ValidityCache;
use crate::board::rules;
use crate::board::tile::Tile;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sorted collection of tiles forming one placed (or in-progress) group
///
/// Tiles are kept sorted after every append so equality and hashing do not
/// depend on the order tiles arrived in. The strict-validity flag is a
/// per-instance memo and takes no part in equality.
#[derive(Clone, Debug, Default)]
pub struct Group {
    tiles: Vec<Tile>,
    complete: Option<bool>,
}

impl Group {
    /// Create an empty group
    pub const fn new() -> Self {
        Self {
            tiles: Vec::new(),
            complete: None,
        }
    }

    /// Create a group from any tiles, canonicalizing their order
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut tiles: Vec<Tile> = tiles.into_iter().collect();
        tiles.sort_unstable();
        Self {
            tiles,
            complete: None,
        }
    }

    /// Tiles in canonical order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the group
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the group holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add a tile, keeping the canonical order
    pub fn append(&mut self, tile: Tile) {
        insert_sorted(&mut self.tiles, tile);
        self.complete = None;
    }

    /// Whether appending `tile` would leave a valid group
    ///
    /// Works on a copy; the receiver is never modified.
    pub fn can_accept(&self, tile: Tile, partial: bool, cache: &mut ValidityCache) -> bool {
        let mut candidate = self.tiles.clone();
        insert_sorted(&mut candidate, tile);
        check(&candidate, partial, cache)
    }

    /// Whether the group is a run or a set under the requested mode
    pub fn is_valid(&self, partial: bool, cache: &mut ValidityCache) -> bool {
        check(&self.tiles, partial, cache)
    }

    /// Strict validity, memoized on the instance until the next append
    pub fn is_complete(&mut self, cache: &mut ValidityCache) -> bool {
        if let Some(complete) = self.complete {
            return complete;
        }
        let complete = check(&self.tiles, false, cache);
        self.complete = Some(complete);
        complete
    }

    /// Shape of the group for display
    pub fn kind(&self) -> rules::GroupKind {
        rules::classify(&self.tiles)
    }
}

fn insert_sorted(tiles: &mut Vec<Tile>, tile: Tile) {
    let position = tiles.partition_point(|existing| *existing <= tile);
    tiles.insert(position, tile);
}

fn check(tiles: &[Tile], partial: bool, cache: &mut ValidityCache) -> bool {
    cache.get_or_compute(tiles, partial, || rules::is_valid(tiles, partial))
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Group {}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind())?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
