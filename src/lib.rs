//! Depth-first placement search for tile-rummy layouts
//!
//! Given the tiles already on the board and a multiset of new tiles, the
//! solver rearranges everything into runs and sets, or proves that no such
//! arrangement exists. Group validity and whole-call results are memoized in
//! caches owned by the solver.

#![forbid(unsafe_code)]

/// Search engine: solver, pre-filter, search bookkeeping and caches
pub mod algorithm;
/// Tiles, groups, layouts and the validity rules they obey
pub mod board;
/// Supply, hands and the turn-taking game loop built on the solver
pub mod game;
/// Configuration, errors, CLI, logging, progress and cache snapshots
pub mod io;

pub use algorithm::solver::{Solver, SolverConfig};
pub use board::layout::Layout;
pub use board::tile::{Kind, Tile};
pub use io::error::{AlgorithmError, Result};
