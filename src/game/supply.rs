//! Finite, non-replenishing pile of face-down tiles

use crate::board::tile::{Kind, Tile};
use crate::io::configuration::MAX_RANK;
use crate::io::error::{Result, invalid_parameter};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Shuffled supply of tiles drawn one at a time from the top
#[derive(Clone, Debug)]
pub struct Supply {
    tiles: Vec<Tile>,
}

impl Supply {
    /// Build `duplicates` copies of every tile identity and shuffle them
    ///
    /// # Errors
    ///
    /// Returns an error if `duplicates` is zero
    pub fn new(duplicates: usize, seed: u64) -> Result<Self> {
        if duplicates == 0 {
            return Err(invalid_parameter(
                "duplicates",
                &duplicates,
                &"supply needs at least one copy of each tile",
            ));
        }

        let mut tiles = Vec::with_capacity(duplicates * Kind::ALL.len() * MAX_RANK as usize);
        for _ in 0..duplicates {
            for kind in Kind::ALL {
                for rank in 1..=MAX_RANK {
                    tiles.push(Tile::new(kind, rank)?);
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        tiles.shuffle(&mut rng);
        Ok(Self { tiles })
    }

    /// Use `tiles` as-is; the last tile is drawn first
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Take the top tile, or `None` once the supply is exhausted
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Tiles left to draw
    pub const fn remaining(&self) -> usize {
        self.tiles.len()
    }

    /// True once every tile has been drawn
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
