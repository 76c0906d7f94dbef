//! A player's held tiles and the turn strategy built on the solver

use crate::algorithm::solver::Solver;
use crate::board::layout::Layout;
use crate::board::tile::Tile;
use crate::game::supply::Supply;
use crate::io::error::Result;
use log::{debug, info};
use std::fmt;

/// What happened on a single turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Some held tiles went onto the board
    Played {
        /// Tiles taken from the hand
        placed: Vec<Tile>,
        /// The board to adopt from now on
        board: Layout,
    },
    /// Nothing could be played, so one tile was drawn
    Drew(Tile),
    /// Nothing could be played and the supply is empty
    SupplyExhausted,
}

/// Unordered collection of tiles held by one player
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Create an empty hand
    pub const fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Create a hand holding `tiles`
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Held tiles, in the order they were received
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of held tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when nothing is held
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Receive a tile
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Give up one copy of `tile`, returning false if it was not held
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&held| held == tile) {
            Some(position) => {
                self.tiles.remove(position);
                true
            }
            None => false,
        }
    }

    /// Distinct sub-multisets of the hand worth offering to the solver
    ///
    /// Largest subsets come first, so a turn places as many tiles as it can.
    /// Within one size subsets follow tile order. At most `max_attempts` are
    /// produced.
    pub fn candidate_subsets(&self, max_attempts: usize) -> Vec<Vec<Tile>> {
        let mut sorted = self.tiles.clone();
        sorted.sort_unstable();

        let mut subsets = Vec::new();
        if max_attempts == 0 {
            return subsets;
        }

        for size in (1..=sorted.len()).rev() {
            let mut current = Vec::with_capacity(size);
            let mut emit = |subset: &[Tile]| {
                subsets.push(subset.to_vec());
                subsets.len() < max_attempts
            };
            if !visit_combinations(&sorted, size, &mut current, &mut emit) {
                break;
            }
        }
        subsets
    }

    /// Try to play held tiles onto `board`, drawing if nothing fits
    ///
    /// Candidate subsets are tried in [`Hand::candidate_subsets`] order; the
    /// first one the solver can place wins and leaves the hand.
    ///
    /// # Errors
    ///
    /// Propagates solver errors other than infeasibility or an exhausted
    /// node budget, which just move on to the next subset
    pub fn take_turn(
        &mut self,
        board: &Layout,
        supply: &mut Supply,
        solver: &mut Solver,
        max_attempts: usize,
    ) -> Result<TurnOutcome> {
        for subset in self.candidate_subsets(max_attempts) {
            match solver.insert(board, &subset) {
                Ok(layout) => {
                    for &tile in &subset {
                        self.remove(tile);
                    }
                    info!("placed {} tiles", subset.len());
                    return Ok(TurnOutcome::Played {
                        placed: subset,
                        board: layout,
                    });
                }
                Err(error) if error.is_search_failure() => {
                    debug!("subset of {} rejected: {error}", subset.len());
                }
                Err(error) => return Err(error),
            }
        }

        Ok(match supply.draw() {
            Some(tile) => {
                self.add(tile);
                info!("drew {tile}");
                TurnOutcome::Drew(tile)
            }
            None => {
                info!("supply exhausted");
                TurnOutcome::SupplyExhausted
            }
        })
    }
}

/// Walk size-`size` combinations of sorted `rest`, skipping repeated multisets
///
/// Returns false as soon as `emit` asks to stop.
fn visit_combinations<F>(
    rest: &[Tile],
    size: usize,
    current: &mut Vec<Tile>,
    emit: &mut F,
) -> bool
where
    F: FnMut(&[Tile]) -> bool,
{
    if current.len() == size {
        return emit(current.as_slice());
    }

    let needed = size - current.len();
    let mut previous = None;
    for (offset, &tile) in rest.iter().enumerate() {
        if rest.len() - offset < needed {
            break;
        }
        if previous == Some(tile) {
            continue;
        }
        previous = Some(tile);

        current.push(tile);
        let tail = rest.get(offset + 1..).unwrap_or_default();
        let keep_going = visit_combinations(tail, size, current, emit);
        current.pop();
        if !keep_going {
            return false;
        }
    }
    true
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles.iter().map(ToString::to_string).collect();
        f.write_str(&tiles.join(", "))
    }
}
