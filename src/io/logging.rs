//! Logger installation for the command-line tool

use crate::io::error::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Level string for a `-v` count: warn, info, debug, then trace
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr
///
/// `RUST_LOG` takes precedence over the verbosity-derived level. The returned
/// handle must be kept alive for as long as logs should be written.
///
/// # Errors
///
/// Returns an error if the level string is malformed or a logger is already set
pub fn init(verbosity: u8) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level_for(verbosity))?
        .format(flexi_logger::colored_default_format)
        .start()?;
    Ok(handle)
}
