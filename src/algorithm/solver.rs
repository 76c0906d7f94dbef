use crate::algorithm::bitset::TileBitset;
use crate::algorithm::cache::{SolveCache, SolveOutcome, ValidityCache};
use crate::algorithm::feasibility::FeasibilityCountLayer;
use crate::algorithm::search::{ExploredStates, SearchNode, SearchStats, without_one};
use crate::board::layout::Layout;
use crate::board::tile::Tile;
use crate::io::configuration::{MAX_INCOMPLETE_DEPTH, MAX_PARTIAL_GROUPS, MIN_GROUP_SIZE};
use crate::io::error::{AlgorithmError, InfeasibleReason, Result, infeasible};
use log::{debug, trace};

/// Search parameters controlling pruning and deduplication
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Consecutive incomplete placements allowed before a branch is cut
    pub max_incomplete_depth: usize,
    /// Unfinished groups a layout may hold at once
    pub max_partial_groups: usize,
    /// Ignore group order when deduplicating explored layouts
    pub canonical_group_order: bool,
    /// Abort a single search after expanding this many nodes
    pub node_budget: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_incomplete_depth: MAX_INCOMPLETE_DEPTH,
            max_partial_groups: MAX_PARTIAL_GROUPS,
            canonical_group_order: false,
            node_budget: None,
        }
    }
}

/// Depth-first branch-and-bound placement solver
///
/// Owns the validity cache and the result cache, so independent solvers
/// never share state. Caches can be injected with [`Solver::with_caches`],
/// typically after restoring a snapshot.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    validity: ValidityCache,
    results: SolveCache,

    /// Counters across every call made on this solver
    pub stats: SearchStats,
}

impl Solver {
    /// Create a solver with cold caches
    pub fn new(config: SolverConfig) -> Self {
        Self::with_caches(config, ValidityCache::new(), SolveCache::new())
    }

    /// Create a solver around existing caches
    pub fn with_caches(config: SolverConfig, validity: ValidityCache, results: SolveCache) -> Self {
        Self {
            config,
            validity,
            results,
            stats: SearchStats::default(),
        }
    }

    /// Active search parameters
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validity cache shared by every layout this solver builds
    pub const fn validity_cache(&self) -> &ValidityCache {
        &self.validity
    }

    /// Mutable validity cache, for callers assembling layouts by hand
    pub const fn validity_cache_mut(&mut self) -> &mut ValidityCache {
        &mut self.validity
    }

    /// Memoized solve outcomes
    pub const fn result_cache(&self) -> &SolveCache {
        &self.results
    }

    /// Give up the caches, e.g. to snapshot them
    pub fn into_caches(self) -> (ValidityCache, SolveCache) {
        (self.validity, self.results)
    }

    /// Arrange exactly `tiles` into a layout of finished runs and sets
    ///
    /// Input order does not matter. Repeated calls with the same multiset are
    /// answered from the result cache without searching again.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::Infeasible`] when no arrangement exists, and
    /// [`AlgorithmError::SearchBudgetExceeded`] when a node budget is set and
    /// runs out first
    pub fn solve(&mut self, tiles: &[Tile]) -> Result<Layout> {
        let tile_count = tiles.len();
        if tile_count < MIN_GROUP_SIZE {
            debug!("{tile_count} tiles cannot form a group");
            return Err(infeasible(tile_count, InfeasibleReason::TooFewTiles));
        }
        self.stats.solves += 1;

        let mut key = tiles.to_vec();
        key.sort_unstable();

        match self.results.lookup(&key) {
            Some(SolveOutcome::Solved(layout)) => {
                self.stats.result_hits += 1;
                debug!("result cache hit for {tile_count} tiles");
                return Ok(layout.clone());
            }
            Some(SolveOutcome::Infeasible(reason)) => {
                self.stats.result_hits += 1;
                debug!("result cache hit for {tile_count} tiles: {reason}");
                return Err(infeasible(tile_count, *reason));
            }
            None => {}
        }

        let counts = FeasibilityCountLayer::from_tiles(tiles);
        if let Some(tile) = counts.first_isolated(tiles) {
            self.stats.prefilter_rejections += 1;
            let reason = InfeasibleReason::Isolated(tile);
            debug!("pre-filter rejected {tile_count} tiles: {reason}");
            self.results.record(key, SolveOutcome::Infeasible(reason));
            return Err(infeasible(tile_count, reason));
        }

        // Provisional failure until the search proves otherwise
        self.results.record(
            key.clone(),
            SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted),
        );

        match self.search(tiles.to_vec()) {
            Ok(Some(layout)) => {
                debug!(
                    "placed {tile_count} tiles in {} groups",
                    layout.groups().len()
                );
                self.results.record(key, SolveOutcome::Solved(layout.clone()));
                Ok(layout)
            }
            Ok(None) => {
                debug!("search exhausted for {tile_count} tiles");
                Err(infeasible(tile_count, InfeasibleReason::SearchExhausted))
            }
            Err(error) => {
                self.results.forget(&key);
                Err(error)
            }
        }
    }

    /// Rearrange `layout` together with `tiles` into a new complete layout
    ///
    /// The input layout is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::solve`] on the combined multiset
    pub fn insert(&mut self, layout: &Layout, tiles: &[Tile]) -> Result<Layout> {
        let mut pool = layout.tiles().to_vec();
        pool.extend_from_slice(tiles);
        self.solve(&pool)
    }

    fn search(&mut self, pool: Vec<Tile>) -> Result<Option<Layout>> {
        let mut stack = vec![SearchNode::root(pool)];
        let mut explored = ExploredStates::new(self.config.canonical_group_order);
        let mut next_id = 1;
        let mut expanded = 0;

        while let Some(node) = stack.pop() {
            expanded += 1;
            self.stats.nodes_expanded += 1;
            if let Some(budget) = self.config.node_budget.filter(|&budget| expanded > budget) {
                return Err(AlgorithmError::SearchBudgetExceeded {
                    nodes: expanded,
                    budget,
                });
            }

            if node.is_solution() {
                debug!(
                    "solution at node {} after {expanded} expansions, {} states",
                    node.id,
                    explored.len()
                );
                return Ok(Some(node.layout));
            }

            trace!(
                "expanding node {} from {:?}: {} tiles left, incomplete depth {}",
                node.id,
                node.parent,
                node.remaining.len(),
                node.incomplete_depth
            );

            let mut tried = TileBitset::new();
            for &tile in &node.remaining {
                if !tried.insert(tile) {
                    continue;
                }

                let other_pieces = without_one(&node.remaining, tile);
                let mut candidates = node.layout.branch(tile, true, &mut self.validity);
                if candidates.is_empty() {
                    candidates.push(node.layout.with_singleton(tile, &mut self.validity));
                }

                for candidate in candidates {
                    let key = explored.key_for(&candidate);
                    if explored.contains(&key)
                        || candidate.partial_groups() > self.config.max_partial_groups
                    {
                        continue;
                    }
                    explored.mark(key);
                    self.stats.states_explored += 1;

                    let incomplete_depth = if candidate.is_complete() {
                        0
                    } else {
                        node.incomplete_depth + 1
                    };
                    if incomplete_depth > self.config.max_incomplete_depth {
                        continue;
                    }

                    stack.push(SearchNode {
                        id: next_id,
                        layout: candidate,
                        remaining: other_pieces.clone(),
                        parent: Some(node.id),
                        incomplete_depth,
                    });
                    next_id += 1;
                }
            }
        }

        Ok(None)
    }
}
