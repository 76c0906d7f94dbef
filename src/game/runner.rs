//! Turn-taking game loop around a shared board

use crate::algorithm::solver::Solver;
use crate::board::layout::Layout;
use crate::board::tile::Tile;
use crate::game::hand::{Hand, TurnOutcome};
use crate::game::supply::Supply;
use crate::io::configuration::{
    DEFAULT_DUPLICATES, DEFAULT_HAND_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYERS, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use log::info;

/// Table setup for a simulated game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of seated players
    pub players: usize,
    /// Tiles dealt to each player up front
    pub hand_size: usize,
    /// Copies of every tile identity in the supply
    pub duplicates: usize,
    /// Seed for the supply shuffle
    pub seed: u64,
    /// Subsets a player offers the solver before drawing
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            hand_size: DEFAULT_HAND_SIZE,
            duplicates: DEFAULT_DUPLICATES,
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Condensed record of one player's turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnRecord {
    /// Tiles moved from the hand to the board
    Played(Vec<Tile>),
    /// Tile taken from the supply
    Drew(Tile),
    /// The player had to draw but the supply was empty
    SupplyExhausted,
}

/// Summary of one round of turns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// One-based round number
    pub round: usize,
    /// Turns in seating order; shorter than the table if the supply ran out
    pub turns: Vec<TurnRecord>,
    /// Groups on the board after the round
    pub groups_on_board: usize,
    /// Tiles left in the supply after the round
    pub supply_remaining: usize,
}

impl RoundReport {
    /// True when a player needed to draw from an empty supply
    pub fn supply_exhausted(&self) -> bool {
        self.turns.contains(&TurnRecord::SupplyExhausted)
    }
}

/// Shared board, supply, hands and the solver every player consults
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Layout,
    supply: Supply,
    hands: Vec<Hand>,
    solver: Solver,
    round: usize,
}

impl Game {
    /// Shuffle a fresh supply and deal the opening hands
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no players or no tiles
    pub fn new(config: GameConfig, solver: Solver) -> Result<Self> {
        let supply = Supply::new(config.duplicates, config.seed)?;
        Self::with_supply(config, supply, solver)
    }

    /// Deal the opening hands from a prepared supply
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no players
    pub fn with_supply(config: GameConfig, supply: Supply, solver: Solver) -> Result<Self> {
        if config.players == 0 {
            return Err(invalid_parameter(
                "players",
                &config.players,
                &"at least one player is needed",
            ));
        }

        let mut game = Self {
            config,
            board: Layout::new(),
            supply,
            hands: vec![Hand::new(); config.players],
            solver,
            round: 0,
        };
        game.deal();
        Ok(game)
    }

    fn deal(&mut self) {
        for _ in 0..self.config.hand_size {
            for hand in &mut self.hands {
                let Some(tile) = self.supply.draw() else {
                    return;
                };
                hand.add(tile);
            }
        }
    }

    /// Current shared board
    pub const fn board(&self) -> &Layout {
        &self.board
    }

    /// Hands in seating order
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Remaining supply
    pub const fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Solver shared by every player
    pub const fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Give back the solver, e.g. to snapshot its caches
    pub fn into_solver(self) -> Solver {
        self.solver
    }

    /// Rounds completed so far
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Let every player take one turn
    ///
    /// The round stops early when a player must draw from an empty supply.
    ///
    /// # Errors
    ///
    /// Propagates unexpected solver errors
    pub fn play_round(&mut self) -> Result<RoundReport> {
        self.round += 1;
        let mut turns = Vec::with_capacity(self.hands.len());

        for (player, hand) in self.hands.iter_mut().enumerate() {
            let outcome = hand.take_turn(
                &self.board,
                &mut self.supply,
                &mut self.solver,
                self.config.max_attempts,
            )?;

            let record = match outcome {
                TurnOutcome::Played { placed, board } => {
                    self.board = board;
                    TurnRecord::Played(placed)
                }
                TurnOutcome::Drew(tile) => TurnRecord::Drew(tile),
                TurnOutcome::SupplyExhausted => TurnRecord::SupplyExhausted,
            };
            info!("round {} player {}: {record:?}, holds [{hand}]", self.round, player + 1);

            let exhausted = record == TurnRecord::SupplyExhausted;
            turns.push(record);
            if exhausted {
                break;
            }
        }

        info!("after round {}: {}", self.round, self.board);
        Ok(RoundReport {
            round: self.round,
            turns,
            groups_on_board: self.board.groups().len(),
            supply_remaining: self.supply.remaining(),
        })
    }

    /// Play up to `rounds` rounds, stopping once the supply is exhausted
    ///
    /// # Errors
    ///
    /// Propagates unexpected solver errors
    pub fn run(&mut self, rounds: usize, progress: &mut ProgressManager) -> Result<Vec<RoundReport>> {
        progress.initialize(rounds, self.hands.len());

        let mut reports = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            let report = self.play_round()?;
            progress.complete_round(&report, &self.hands);
            let exhausted = report.supply_exhausted();
            reports.push(report);
            if exhausted {
                break;
            }
        }

        progress.finish();
        Ok(reports)
    }
}
