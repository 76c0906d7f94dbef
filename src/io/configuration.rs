//! Domain constants, search ceilings and runtime configuration defaults

// Reference tile domain
/// Number of distinct tile kinds
pub const KIND_COUNT: usize = 4;
/// Highest rank a tile may carry (ranks start at 1)
pub const MAX_RANK: u8 = 13;
/// Number of distinct (kind, rank) identities
pub const TILE_IDENTITIES: usize = KIND_COUNT * MAX_RANK as usize;

/// Smallest group size that counts as a finished run or set
pub const MIN_GROUP_SIZE: usize = 3;

// Pruning heuristics for the depth-first search
/// Consecutive placements allowed while the layout holds an unfinished group
pub const MAX_INCOMPLETE_DEPTH: usize = 3;
/// Unfinished groups tolerated on the layout at the same time
pub const MAX_PARTIAL_GROUPS: usize = 1;

// Game defaults
/// Copies of every (kind, rank) identity in a fresh supply
pub const DEFAULT_DUPLICATES: usize = 2;
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Rounds played before the simulation stops
pub const DEFAULT_ROUNDS: usize = 10;
/// Number of seated players
pub const DEFAULT_PLAYERS: usize = 2;
/// Tiles dealt to each player before the first round
pub const DEFAULT_HAND_SIZE: usize = 3;
/// Subsets of a hand tried against the solver before drawing instead
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Version tag written into cache snapshots
pub const SNAPSHOT_VERSION: u32 = 1;
