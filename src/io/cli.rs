//! Command-line interface for solving tile multisets and simulating games

use crate::algorithm::solver::{Solver, SolverConfig};
use crate::board::tile::Tile;
use crate::game::runner::{Game, GameConfig, TurnRecord};
use crate::io::configuration::{
    DEFAULT_DUPLICATES, DEFAULT_HAND_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_PLAYERS, DEFAULT_ROUNDS,
    DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::snapshot::CacheSnapshot;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rummisolve")]
#[command(author, version, about = "Place tile-rummy tiles into valid runs and sets")]
/// Command-line arguments for the solver tool
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Load solver caches from this file at startup and save them on exit
    #[arg(long, value_name = "FILE", global = true)]
    pub cache: Option<PathBuf>,

    /// Abort any single search after this many expanded nodes
    #[arg(long, global = true)]
    pub node_budget: Option<usize>,

    /// Ignore group order when deduplicating explored layouts
    #[arg(long, global = true)]
    pub canonical_order: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a game where every player plays greedily
    Play(PlayArgs),
    /// Arrange the given tiles into runs and sets
    Solve(SolveArgs),
}

/// Arguments for `play`
#[derive(Args)]
pub struct PlayArgs {
    /// Random seed for the supply shuffle
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum rounds to play
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: usize,

    /// Number of players
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    pub players: usize,

    /// Tiles dealt to each player
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    pub hand_size: usize,

    /// Copies of each tile in the supply
    #[arg(long, default_value_t = DEFAULT_DUPLICATES)]
    pub duplicates: usize,

    /// Subsets of a hand to try before drawing
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl PlayArgs {
    /// Table setup described by these arguments
    pub const fn game_config(&self) -> GameConfig {
        GameConfig {
            players: self.players,
            hand_size: self.hand_size,
            duplicates: self.duplicates,
            seed: self.seed,
            max_attempts: self.max_attempts,
        }
    }
}

/// Arguments for `solve`
#[derive(Args)]
pub struct SolveArgs {
    /// Tiles such as r1 b13 y7 k2
    #[arg(value_name = "TILE", required = true, value_parser = parse_tile)]
    pub tiles: Vec<Tile>,
}

fn parse_tile(text: &str) -> std::result::Result<Tile, String> {
    text.parse().map_err(|error: crate::AlgorithmError| error.to_string())
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search parameters chosen on the command line
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            canonical_group_order: self.canonical_order,
            node_budget: self.node_budget,
            ..SolverConfig::default()
        }
    }
}

/// Runs one subcommand with cache restore and save around it
pub struct SessionRunner {
    cli: Cli,
}

impl SessionRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the chosen subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the game hits an unexpected solver error or the
    /// cache snapshot cannot be written
    pub fn run(&self) -> Result<()> {
        let solver = self.load_solver();

        let solver = match &self.cli.command {
            Command::Play(args) => self.play(args, solver)?,
            Command::Solve(args) => Self::solve(args, solver)?,
        };

        self.save_cache(&solver)
    }

    /// Build a solver, warm if a readable cache snapshot exists
    pub fn load_solver(&self) -> Solver {
        let config = self.cli.solver_config();
        let Some(path) = &self.cli.cache else {
            return Solver::new(config);
        };

        match CacheSnapshot::load(path) {
            Ok(snapshot) => {
                info!("restored {} cache entries from {}", snapshot.len(), path.display());
                let (validity, results) = snapshot.restore();
                Solver::with_caches(config, validity, results)
            }
            Err(error) => {
                warn!("ignoring cache snapshot: {error}");
                Solver::new(config)
            }
        }
    }

    fn save_cache(&self, solver: &Solver) -> Result<()> {
        let Some(path) = &self.cli.cache else {
            return Ok(());
        };
        let snapshot = CacheSnapshot::capture(solver);
        snapshot.save(path)?;
        info!("saved {} cache entries to {}", snapshot.len(), path.display());
        Ok(())
    }

    // Allow print for the final board and per-player summary
    #[allow(clippy::print_stdout)]
    fn play(&self, args: &PlayArgs, solver: Solver) -> Result<Solver> {
        let mut game = Game::new(args.game_config(), solver)?;
        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        let reports = game.run(args.rounds, &mut progress)?;
        let plays = reports
            .iter()
            .flat_map(|report| &report.turns)
            .filter(|turn| matches!(turn, TurnRecord::Played(_)))
            .count();

        println!("{}", game.board());
        for (player, hand) in game.hands().iter().enumerate() {
            println!("Player {}:\n\t{hand}", player + 1);
        }
        println!(
            "{} rounds, {plays} plays, {} tiles left in supply",
            reports.len(),
            game.supply().remaining()
        );

        Ok(game.into_solver())
    }

    // Allow print for the solved layout
    #[allow(clippy::print_stdout)]
    fn solve(args: &SolveArgs, mut solver: Solver) -> Result<Solver> {
        match solver.solve(&args.tiles) {
            Ok(layout) => println!("{layout}"),
            Err(error) if error.is_infeasible() => println!("{error}"),
            Err(error) => return Err(error),
        }
        Ok(solver)
    }
}
