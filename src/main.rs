//! cloudbake CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, dispatch to the bake or
//! optimize pipeline, and exit with appropriate status.
//! For programmatic use, prefer the library API (`cloudbake::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
