//! Tile values and their compact text form
//!
//! A tile is written as its kind letter followed by its rank, so `r1` is the
//! red one and `k13` the black thirteen. The same form is used for CLI input,
//! display and cache snapshots.

use crate::io::configuration::{KIND_COUNT, MAX_RANK};
use crate::io::error::{AlgorithmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The colour family of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Red tiles
    Red,
    /// Blue tiles
    Blue,
    /// Yellow tiles
    Yellow,
    /// Black tiles
    Black,
}

impl Kind {
    /// Every kind in ordering sequence
    pub const ALL: [Self; KIND_COUNT] = [Self::Red, Self::Blue, Self::Yellow, Self::Black];

    /// Dense index in `0..KIND_COUNT`
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Yellow => 2,
            Self::Black => 3,
        }
    }

    /// Single letter used in the text form
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::Black => 'k',
        }
    }

    /// Inverse of [`Kind::letter`], case-insensitive
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'b' => Some(Self::Blue),
            'y' => Some(Self::Yellow),
            'k' => Some(Self::Black),
            _ => None,
        }
    }
}

/// An immutable (kind, rank) value
///
/// Ordering is by kind first, then rank. Two tiles with the same kind and
/// rank are interchangeable everywhere in the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tile {
    kind: Kind,
    rank: u8,
}

impl Tile {
    /// Create a tile, rejecting ranks outside `1..=MAX_RANK`
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidTile`] when the rank is out of range
    pub fn new(kind: Kind, rank: u8) -> Result<Self> {
        if (1..=MAX_RANK).contains(&rank) {
            Ok(Self { kind, rank })
        } else {
            Err(AlgorithmError::InvalidTile {
                input: format!("{}{rank}", kind.letter()),
                reason: "rank out of range",
            })
        }
    }

    /// The tile's kind
    pub const fn kind(self) -> Kind {
        self.kind
    }

    /// The tile's rank, in `1..=MAX_RANK`
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Dense identity index in `0..TILE_IDENTITIES`
    pub const fn identity(self) -> usize {
        self.kind.index() * MAX_RANK as usize + (self.rank as usize - 1)
    }

    /// Parse a whitespace or comma separated list such as `"r1 r2, r3"`
    ///
    /// # Errors
    ///
    /// Returns the first [`AlgorithmError::InvalidTile`] encountered
    pub fn parse_list(text: &str) -> Result<Vec<Self>> {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.letter(), self.rank)
    }
}

impl FromStr for Tile {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| AlgorithmError::InvalidTile {
            input: s.to_string(),
            reason,
        };

        let mut chars = s.trim().chars();
        let kind = chars
            .next()
            .and_then(Kind::from_letter)
            .ok_or_else(|| invalid("unknown kind letter"))?;
        let rank = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_parse| invalid("rank is not a number"))?;

        Self::new(kind, rank).map_err(|_range| invalid("rank out of range"))
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

impl TryFrom<String> for Tile {
    type Error = AlgorithmError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
