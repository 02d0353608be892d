//! Locus - Entry Point
//!
//! Binary entry point for the `locus` command line. Lives in the facade
//! crate, whose library force-links every built-in component.

use clap::Parser;
use locus::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}
