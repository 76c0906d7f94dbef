//! Save and restore solver caches between runs
//!
//! Snapshots are a pure optimization: a missing file restores to cold caches,
//! and nothing else in the crate reads or writes them.

use crate::algorithm::cache::{SolveCache, SolveOutcome, ValidityCache};
use crate::algorithm::solver::Solver;
use crate::board::group::Group;
use crate::board::layout::Layout;
use crate::board::rules;
use crate::board::tile::Tile;
use crate::io::configuration::SNAPSHOT_VERSION;
use crate::io::error::{AlgorithmError, InfeasibleReason, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// One memoized validity check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityEntry {
    /// Canonical tile sequence
    pub tiles: Vec<Tile>,
    /// Whether the check relaxed the minimum size
    pub partial: bool,
    /// Memoized answer
    pub valid: bool,
}

/// One memoized solve outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Sorted input multiset
    pub tiles: Vec<Tile>,
    /// Groups of the solution in layout order, or `None` if infeasible
    pub groups: Option<Vec<Vec<Tile>>>,
}

/// Serializable image of a solver's caches
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// Format tag; snapshots with another tag are ignored on load
    pub version: u32,
    /// Validity cache entries
    pub validity: Vec<ValidityEntry>,
    /// Result cache entries
    pub results: Vec<ResultEntry>,
}

impl CacheSnapshot {
    /// Copy both caches of `solver`, sorted for stable output
    pub fn capture(solver: &Solver) -> Self {
        let mut validity: Vec<ValidityEntry> = solver
            .validity_cache()
            .entries()
            .map(|(tiles, partial, valid)| ValidityEntry {
                tiles: tiles.to_vec(),
                partial,
                valid,
            })
            .collect();
        validity.sort_by(|a, b| (&a.tiles, a.partial).cmp(&(&b.tiles, b.partial)));

        let mut results: Vec<ResultEntry> = solver
            .result_cache()
            .entries()
            .map(|(tiles, outcome)| ResultEntry {
                tiles: tiles.to_vec(),
                groups: match outcome {
                    SolveOutcome::Solved(layout) => Some(
                        layout
                            .groups()
                            .iter()
                            .map(|group| group.tiles().to_vec())
                            .collect(),
                    ),
                    SolveOutcome::Infeasible(_) => None,
                },
            })
            .collect();
        results.sort_by(|a, b| a.tiles.cmp(&b.tiles));

        Self {
            version: SNAPSHOT_VERSION,
            validity,
            results,
        }
    }

    /// Rebuild the caches described by this snapshot
    ///
    /// Nothing in the file is trusted. Validity entries are recomputed and
    /// dropped when the stored answer disagrees; solved entries are kept only
    /// when their layout is complete and uses exactly the entry's tiles.
    /// Infeasible entries come back as exhausted searches, since the snapshot
    /// does not keep which check rejected them.
    pub fn restore(self) -> (ValidityCache, SolveCache) {
        let mut validity = ValidityCache::new();
        let mut rejected = 0;
        for mut entry in self.validity {
            entry.tiles.sort_unstable();
            if rules::is_valid(&entry.tiles, entry.partial) == entry.valid {
                validity.insert(entry.tiles, entry.partial, entry.valid);
            } else {
                rejected += 1;
            }
        }

        let mut results = SolveCache::new();
        for mut entry in self.results {
            entry.tiles.sort_unstable();
            let outcome = match entry.groups {
                Some(groups) => {
                    let layout = Layout::from_groups(
                        groups.into_iter().map(Group::from_tiles),
                        &mut validity,
                    );
                    if !solves(&layout, &entry.tiles) {
                        rejected += 1;
                        continue;
                    }
                    SolveOutcome::Solved(layout)
                }
                None => SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted),
            };
            results.record(entry.tiles, outcome);
        }

        if rejected > 0 {
            warn!("dropped {rejected} inconsistent cache snapshot entries");
        }
        (validity, results)
    }

    /// Number of entries across both caches
    pub fn len(&self) -> usize {
        self.validity.len() + self.results.len()
    }

    /// True when the snapshot holds nothing
    pub fn is_empty(&self) -> bool {
        self.validity.is_empty() && self.results.is_empty()
    }

    /// Write the snapshot as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or encoded
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "create snapshot",
            source,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|source| AlgorithmError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "write snapshot",
            source,
        })
    }

    /// Read a snapshot, treating a missing file as an empty snapshot
    ///
    /// A snapshot written under another format version also loads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::empty()),
            Err(source) => {
                return Err(AlgorithmError::FileSystem {
                    path: path.to_path_buf(),
                    operation: "open snapshot",
                    source,
                });
            }
        };

        let snapshot: Self = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            AlgorithmError::Snapshot {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if snapshot.version == SNAPSHOT_VERSION {
            Ok(snapshot)
        } else {
            Ok(Self::empty())
        }
    }

    /// Snapshot of cold caches
    pub fn empty() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            ..Self::default()
        }
    }
}

/// True when `layout` is a finished arrangement of exactly the sorted `tiles`
fn solves(layout: &Layout, tiles: &[Tile]) -> bool {
    let mut placed = layout.tiles().to_vec();
    placed.sort_unstable();
    layout.is_complete() && placed == tiles
}
