use crate::board::layout::Layout;
use crate::board::tile::Tile;
use crate::io::error::InfeasibleReason;
use std::collections::HashMap;

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Memoization cache for group validity checks
///
/// Keys are canonical (sorted) tile sequences, split by partial mode so
/// lookups can borrow a slice without allocating. Validity is a pure
/// function of the multiset, so entries are never invalidated.
#[derive(Clone, Default, Debug)]
pub struct ValidityCache {
    strict: HashMap<Vec<Tile>, bool>,
    partial: HashMap<Vec<Tile>, bool>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl ValidityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached validity or compute and store it
    ///
    /// `tiles` must already be sorted; the closure only runs on a miss.
    pub fn get_or_compute<F>(&mut self, tiles: &[Tile], partial: bool, compute_fn: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        let map = if partial {
            &mut self.partial
        } else {
            &mut self.strict
        };

        if let Some(&valid) = map.get(tiles) {
            self.stats.hits += 1;
            return valid;
        }

        self.stats.misses += 1;
        let valid = compute_fn();
        map.insert(tiles.to_vec(), valid);
        valid
    }

    /// Seed an entry, as done when restoring a snapshot
    pub fn insert(&mut self, tiles: Vec<Tile>, partial: bool, valid: bool) {
        let map = if partial {
            &mut self.partial
        } else {
            &mut self.strict
        };
        map.insert(tiles, valid);
    }

    /// Iterate over `(tiles, partial, valid)` entries
    pub fn entries(&self) -> impl Iterator<Item = (&[Tile], bool, bool)> + '_ {
        let strict = self
            .strict
            .iter()
            .map(|(tiles, &valid)| (tiles.as_slice(), false, valid));
        let partial = self
            .partial
            .iter()
            .map(|(tiles, &valid)| (tiles.as_slice(), true, valid));
        strict.chain(partial)
    }

    /// Number of memoized entries across both modes
    pub fn len(&self) -> usize {
        self.strict.len() + self.partial.len()
    }

    /// True when nothing has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.strict.is_empty() && self.partial.is_empty()
    }
}

/// Memoized outcome of a whole solve call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A complete layout using exactly the key's tiles
    Solved(Layout),
    /// The key's tiles were proven unplaceable
    Infeasible(InfeasibleReason),
}

/// Cross-call cache mapping a sorted tile multiset to its solve outcome
#[derive(Clone, Default, Debug)]
pub struct SolveCache {
    outcomes: HashMap<Vec<Tile>, SolveOutcome>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl SolveCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previous outcome for the sorted multiset `key`
    pub fn lookup(&mut self, key: &[Tile]) -> Option<&SolveOutcome> {
        let outcome = self.outcomes.get(key);
        if outcome.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        outcome
    }

    /// Record (or overwrite) the outcome for `key`
    pub fn record(&mut self, key: Vec<Tile>, outcome: SolveOutcome) {
        self.outcomes.insert(key, outcome);
    }

    /// Drop a provisional entry that turned out to prove nothing
    pub fn forget(&mut self, key: &[Tile]) {
        self.outcomes.remove(key);
    }

    /// Iterate over memoized outcomes
    pub fn entries(&self) -> impl Iterator<Item = (&[Tile], &SolveOutcome)> + '_ {
        self.outcomes
            .iter()
            .map(|(tiles, outcome)| (tiles.as_slice(), outcome))
    }

    /// Number of memoized multisets
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True when nothing has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
