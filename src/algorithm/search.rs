//! Search bookkeeping for the depth-first placement search
//!
//! Nodes carry a full, independent copy of their layout; backtracking is
//! simply dropping a node.

use crate::board::layout::{Layout, LayoutKey};
use crate::board::tile::Tile;
use std::collections::HashSet;

/// One state on the search stack
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// Sequential id within one search, assigned at push time
    pub id: usize,
    /// Layout built so far
    pub layout: Layout,
    /// Tiles still waiting to be placed, in pool order
    pub remaining: Vec<Tile>,
    /// Id of the node this one was expanded from
    pub parent: Option<usize>,
    /// Consecutive placements since the layout was last complete
    pub incomplete_depth: usize,
}

impl SearchNode {
    /// Root of a search: empty layout, the whole pool remaining
    pub const fn root(remaining: Vec<Tile>) -> Self {
        Self {
            id: 0,
            layout: Layout::new(),
            remaining,
            parent: None,
            incomplete_depth: 0,
        }
    }

    /// Every tile placed and the layout holds only finished groups
    pub const fn is_solution(&self) -> bool {
        self.remaining.is_empty() && self.incomplete_depth == 0
    }
}

/// Remove one occurrence of `tile` from `pool`, preserving order
pub fn without_one(pool: &[Tile], tile: Tile) -> Vec<Tile> {
    let mut rest = pool.to_vec();
    if let Some(position) = rest.iter().position(|&candidate| candidate == tile) {
        rest.remove(position);
    }
    rest
}

/// Layout states already seen during one search
///
/// Stores frozen [`LayoutKey`] snapshots, so the layouts themselves stay free
/// to move onto the stack.
#[derive(Debug, Default)]
pub struct ExploredStates {
    seen: HashSet<LayoutKey>,
    canonical_order: bool,
}

impl ExploredStates {
    /// Create an empty set; `canonical_order` ignores group order in keys
    pub fn new(canonical_order: bool) -> Self {
        Self {
            seen: HashSet::new(),
            canonical_order,
        }
    }

    /// Freeze `layout` into the key this set compares by
    pub fn key_for(&self, layout: &Layout) -> LayoutKey {
        layout.key(self.canonical_order)
    }

    /// True if an equal layout state was already marked
    pub fn contains(&self, key: &LayoutKey) -> bool {
        self.seen.contains(key)
    }

    /// Mark a layout state, returning true if it was new
    pub fn mark(&mut self, key: LayoutKey) -> bool {
        self.seen.insert(key)
    }

    /// Number of distinct states marked
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when nothing has been marked
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Counters accumulated across every search run by one solver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to `solve` that got past the size check
    pub solves: usize,
    /// Calls answered from the result cache
    pub result_hits: usize,
    /// Calls rejected by the feasibility pre-filter
    pub prefilter_rejections: usize,
    /// Nodes popped from the search stack
    pub nodes_expanded: usize,
    /// Layout states accepted into explored sets
    pub states_explored: usize,
}
