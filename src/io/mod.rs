/// Command-line parsing and session orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Logger setup
pub mod logging;
/// Progress display for simulated games
pub mod progress;
/// Cache snapshot persistence
pub mod snapshot;
