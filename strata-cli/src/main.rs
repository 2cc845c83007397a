//! Binary entrypoint.
//!
//! Reads an edge list, runs the decomposition pipeline and prints the
//! report. All of the graph work lives in `strata-core`.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::init_logging(args.verbose);
    let output = cli::run(&args)?;
    print!("{output}");
    Ok(())
}
