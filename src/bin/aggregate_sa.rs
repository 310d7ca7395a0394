use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::path::PathBuf;

use mis_aggregator::aggregation;
use mis_aggregator::csv_io;

/// Aggregate the SA calibration grid by (n, p, T0, alpha, seconds).
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV produced by the SA calibration driver
    input: PathBuf,
    /// Path to the aggregated output CSV
    #[arg(short, long, default_value = "results_sa_grid_agg.csv")]
    output: PathBuf,
    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let df = csv_io::read_csv(&args.input)?;
    let aggregated = aggregation::aggregate_sa(df)?;
    info!(
        "aggregated {} (n, p, T0, alpha, seconds) groups",
        aggregated.height()
    );
    csv_io::write_csv(aggregated, &args.output)?;
    println!("OK -> {}", args.output.display());
    Ok(())
}
