use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::path::PathBuf;

use mis_aggregator::aggregation;
use mis_aggregator::csv_io;

/// Aggregate GA+LS results by instance parameters (n, p).
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// CSV with one row per GA+LS run
    #[arg(short, long, default_value = "ga_ls_final.csv")]
    input: PathBuf,
    /// Path to the aggregated output CSV
    #[arg(short, long, default_value = "ga_ls_aggregated.csv")]
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
    // GA+LS runs are a curated batch: a malformed instance name is a
    // tooling error, not noise to skip over
    let aggregated = match aggregation::aggregate_ga_ls(df) {
        Ok(aggregated) => aggregated,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(exitcode::DATAERR);
        }
    };
    info!("aggregated {} (n, p) groups", aggregated.height());
    csv_io::write_csv(aggregated, &args.output)?;
    println!("OK -> {}", args.output.display());
    Ok(())
}
