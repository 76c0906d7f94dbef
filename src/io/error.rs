//! Error types for the placement search and its collaborators

use crate::board::tile::Tile;
use std::fmt;
use std::path::PathBuf;

/// Why a tile multiset admits no legal arrangement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Fewer tiles than a single minimal group needs
    TooFewTiles,
    /// A tile has neither a run neighbour nor enough same-rank partners
    Isolated(Tile),
    /// The depth-first search ran out of states without a complete layout
    SearchExhausted,
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewTiles => write!(f, "too few tiles for a single group"),
            Self::Isolated(tile) => write!(f, "tile {tile} cannot join any run or set"),
            Self::SearchExhausted => write!(f, "no arrangement found"),
        }
    }
}

/// Main error type for all solver operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// No legal arrangement exists for the given multiset
    ///
    /// This is an expected outcome, not an anomaly: callers are meant to
    /// recover by trying a different multiset.
    Infeasible {
        /// Number of tiles in the rejected multiset
        tile_count: usize,
        /// Which check proved the multiset unplaceable
        reason: InfeasibleReason,
    },

    /// The search expanded more nodes than the configured budget allows
    ///
    /// Unlike [`AlgorithmError::Infeasible`] this proves nothing about the
    /// multiset, so it is never memoized.
    SearchBudgetExceeded {
        /// Nodes expanded when the search gave up
        nodes: usize,
        /// Configured node budget
        budget: usize,
    },

    /// Tile text or components outside the tile domain
    InvalidTile {
        /// The rejected input
        input: String,
        /// Explanation of why it was rejected
        reason: &'static str,
    },

    /// A layout operation referenced a group that does not exist
    InvalidGroupIndex {
        /// The requested group index
        index: usize,
        /// Number of groups on the layout
        group_count: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A cache snapshot could not be encoded or decoded
    Snapshot {
        /// Snapshot file involved
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The logger could not be installed
    Logging {
        /// Underlying logger error
        source: flexi_logger::FlexiLoggerError,
    },
}

impl AlgorithmError {
    /// True when the multiset was proven to have no legal arrangement
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. })
    }

    /// True for outcomes a turn strategy recovers from by trying other tiles
    pub const fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Self::Infeasible { .. } | Self::SearchBudgetExceeded { .. }
        )
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible { tile_count, reason } => {
                write!(f, "No legal layout for {tile_count} tiles: {reason}")
            }
            Self::SearchBudgetExceeded { nodes, budget } => {
                write!(f, "Search stopped after {nodes} nodes (budget {budget})")
            }
            Self::InvalidTile { input, reason } => {
                write!(f, "Invalid tile '{input}': {reason}")
            }
            Self::InvalidGroupIndex { index, group_count } => {
                write!(
                    f,
                    "Group index {index} is out of bounds (layout has {group_count} groups)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Snapshot { path, source } => {
                write!(f, "Malformed cache snapshot '{}': {source}", path.display())
            }
            Self::Logging { source } => write!(f, "Failed to start logger: {source}"),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Snapshot { source, .. } => Some(source),
            Self::Logging { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for AlgorithmError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an infeasibility error for a multiset of `tile_count` tiles
pub const fn infeasible(tile_count: usize, reason: InfeasibleReason) -> AlgorithmError {
    AlgorithmError::Infeasible { tile_count, reason }
}
