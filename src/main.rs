//! Claims Triangle CLI
//!
//! Reads claims-payment records from a CSV file and writes, per product,
//! the flattened cumulative loss-development triangle.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use claims_triangle::{ingest, report};

#[derive(Parser)]
#[command(
    name = "claims_triangle",
    version,
    about = "Accumulate claims payments into per-product loss-development triangles"
)]
struct Args {
    /// Claims-payment CSV file to read
    #[arg(default_value = "input.csv")]
    input: PathBuf,

    /// Report file to write
    #[arg(default_value = "output.csv")]
    output: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    info!(
        "input file set to {}, output file set to {}",
        args.input.display(),
        args.output.display()
    );

    let portfolio = ingest::load_from_path(&args.input)?;
    info!(
        "ingestion complete: {} product(s), earliest origin year {:?}, greatest span {}",
        portfolio.product_count(),
        portfolio.stats().earliest_origin_year(),
        portfolio.stats().greatest_span()
    );

    report::write_report_to_path(&portfolio, &args.output)?;

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{err:#}");
        process::exit(1);
    }
}
