//! Board data model
//!
//! This module contains the placement data structures:
//! - Tiles and their text form
//! - Groups and the run/set validity rules
//! - Layouts with copy-on-branch operations

/// A single run or set
pub mod group;
/// The shared play surface
pub mod layout;
/// Pure run and set validity rules
pub mod rules;
/// Tile values
pub mod tile;

pub use group::Group;
pub use layout::Layout;
pub use tile::{Kind, Tile};
