use crate::board::tile::{Kind, Tile};
use crate::io::configuration::{MAX_RANK, TILE_IDENTITIES};
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over the (kind, rank) identities
///
/// Duplicates collapse: a tile is either present or not. Provides O(1)
/// membership testing while walking a pool of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl Default for TileBitset {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TILE_IDENTITIES],
        }
    }

    /// Create a bitset holding every identity present in `tiles`
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut bitset = Self::new();
        for tile in tiles {
            bitset.insert(*tile);
        }
        bitset
    }

    /// Insert a tile, returning true when it was not present before
    pub fn insert(&mut self, tile: Tile) -> bool {
        let index = tile.identity();
        let fresh = !self.contains(tile);
        if fresh {
            self.bits.set(index, true);
        }
        fresh
    }

    /// Test tile membership
    pub fn contains(&self, tile: Tile) -> bool {
        self.bits.get(tile.identity()).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count distinct identities in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract the present tiles in identity order
    pub fn to_vec(&self) -> Vec<Tile> {
        self.bits
            .iter_ones()
            .filter_map(|index| {
                let kind = Kind::ALL.get(index / MAX_RANK as usize)?;
                let rank = u8::try_from(index % MAX_RANK as usize + 1).ok()?;
                Tile::new(*kind, rank).ok()
            })
            .collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.to_vec().iter().map(ToString::to_string).collect();
        write!(f, "TileBitset({} tiles: [{}])", self.count(), tiles.join(", "))
    }
}
