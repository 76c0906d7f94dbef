/// Held tiles and the greedy turn strategy
pub mod hand;
/// Game loop alternating turns around one board
pub mod runner;
/// Shuffled tile supply
pub mod supply;
