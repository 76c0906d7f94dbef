//! CLI entry point for the tile placement solver

use clap::Parser;
use rummisolve::io::cli::{Cli, SessionRunner};
use rummisolve::io::logging;

fn main() -> rummisolve::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;
    SessionRunner::new(cli).run()
}
