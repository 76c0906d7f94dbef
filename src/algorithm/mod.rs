/// Identity bitset for walking distinct tiles of a pool
pub mod bitset;
/// Validity and solve-result memoization caches
pub mod cache;
/// Count-based feasibility pre-filter
pub mod feasibility;
/// Search nodes, explored-state set and counters
pub mod search;
/// Depth-first branch-and-bound solver
pub mod solver;
