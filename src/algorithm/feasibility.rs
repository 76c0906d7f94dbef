use crate::board::tile::{Kind, Tile};
use crate::io::configuration::{KIND_COUNT, MAX_RANK, MIN_GROUP_SIZE};
use ndarray::Array2;

/// Tile counts indexed by `[kind, rank - 1]` for cheap feasibility checks
///
/// Answers the necessary condition checked before a search: every tile must
/// be able to join either a run or a set with what else is in the pool.
pub struct FeasibilityCountLayer {
    counts: Array2<usize>,
    total: usize,
}

impl FeasibilityCountLayer {
    /// Count every tile of the pool
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts = Array2::<usize>::zeros((KIND_COUNT, MAX_RANK as usize));
        for tile in tiles {
            if let Some(count) = counts.get_mut([tile.kind().index(), usize::from(tile.rank()) - 1])
            {
                *count += 1;
            }
        }
        Self {
            counts,
            total: tiles.len(),
        }
    }

    /// Copies of `(kind, rank)` in the pool; zero outside the rank range
    pub fn count(&self, kind: Kind, rank: u8) -> usize {
        usize::from(rank)
            .checked_sub(1)
            .and_then(|column| self.counts.get([kind.index(), column]))
            .copied()
            .unwrap_or(0)
    }

    /// Total tiles counted, duplicates included
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Distinct kinds present at `rank`
    pub fn kinds_at_rank(&self, rank: u8) -> usize {
        Kind::ALL
            .iter()
            .filter(|&&kind| self.count(kind, rank) > 0)
            .count()
    }

    /// A same-kind tile one rank below or above is present
    pub fn has_run_neighbour(&self, tile: Tile) -> bool {
        let below = tile
            .rank()
            .checked_sub(1)
            .is_some_and(|rank| self.count(tile.kind(), rank) > 0);
        let above = tile
            .rank()
            .checked_add(1)
            .is_some_and(|rank| self.count(tile.kind(), rank) > 0);
        below || above
    }

    /// At least two other kinds share the tile's rank
    pub fn has_set_partners(&self, tile: Tile) -> bool {
        self.kinds_at_rank(tile.rank()) >= MIN_GROUP_SIZE
    }

    /// First tile that can join neither a run nor a set, if any
    pub fn first_isolated(&self, tiles: &[Tile]) -> Option<Tile> {
        tiles
            .iter()
            .copied()
            .find(|&tile| !self.has_run_neighbour(tile) && !self.has_set_partners(tile))
    }
}
