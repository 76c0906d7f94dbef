//! Structural validity rules for runs and sets
//!
//! Every check here is a pure function of the tile multiset: the input order
//! never matters and the empty multiset is never valid.

use crate::board::tile::Tile;
use crate::io::configuration::{KIND_COUNT, MIN_GROUP_SIZE};
use std::fmt;

/// Shape of a group as reported for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// Finished run
    Run,
    /// Finished set
    Set,
    /// Too small to finish yet, but extendable into a run or set
    Partial,
    /// Cannot become a run or set by adding tiles
    Invalid,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Run => "Run",
            Self::Set => "Set",
            Self::Partial => "Partial",
            Self::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

const fn large_enough(len: usize, partial: bool) -> bool {
    len > 0 && (partial || len >= MIN_GROUP_SIZE)
}

/// Same kind throughout, with consecutive ranks and no rank repeated
pub fn is_run(tiles: &[Tile], partial: bool) -> bool {
    if !large_enough(tiles.len(), partial) {
        return false;
    }

    let Some(first) = tiles.first() else {
        return false;
    };
    if tiles.iter().any(|tile| tile.kind() != first.kind()) {
        return false;
    }

    let mut ranks: Vec<u8> = tiles.iter().map(|tile| tile.rank()).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| match pair {
        [low, high] => low.checked_add(1) == Some(*high),
        _ => true,
    })
}

/// Same rank throughout, with every kind appearing at most once
pub fn is_set(tiles: &[Tile], partial: bool) -> bool {
    if !large_enough(tiles.len(), partial) {
        return false;
    }

    let Some(first) = tiles.first() else {
        return false;
    };
    if tiles.iter().any(|tile| tile.rank() != first.rank()) {
        return false;
    }

    let mut seen = [false; KIND_COUNT];
    for tile in tiles {
        match seen.get_mut(tile.kind().index()) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Run check first, then set check
pub fn is_valid(tiles: &[Tile], partial: bool) -> bool {
    is_run(tiles, partial) || is_set(tiles, partial)
}

/// Classify a tile multiset for display purposes
pub fn classify(tiles: &[Tile]) -> GroupKind {
    if is_run(tiles, false) {
        GroupKind::Run
    } else if is_set(tiles, false) {
        GroupKind::Set
    } else if is_valid(tiles, true) {
        GroupKind::Partial
    } else {
        GroupKind::Invalid
    }
}
