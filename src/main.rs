//! CLI entry point for the soup search

use clap::Parser;
use soupcensus::io::cli::{Cli, SearchRunner};

fn main() -> soupcensus::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = SearchRunner::new(cli)?;
    runner.run()?;
    Ok(())
}
