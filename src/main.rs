//! primitive-transform CLI entrypoint.
//!
//! Parse args, dispatch to single-file or batch processing, and exit with an
//! appropriate status. For programmatic use, prefer the library API
//! (`primitive_transform::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
