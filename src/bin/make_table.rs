use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::{fs, path::PathBuf};

use mis_aggregator::csv_io;
use mis_aggregator::datastructures::TableConfig;
use mis_aggregator::report;

/// Build the greedy vs. probabilistic greedy report table.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a json config holding the input/output paths
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// CSV with aggregated greedy results
    #[arg(short, long)]
    greedy: Option<PathBuf>,
    /// CSV with aggregated probabilistic greedy results
    #[arg(short, long)]
    prob: Option<PathBuf>,
    /// Path to the output table CSV
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(flatten)]
    verbosity: Verbosity,
}

fn load_config(args: &Args) -> Result<TableConfig> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };
    if let Some(greedy) = &args.greedy {
        config.greedy = greedy.to_path_buf();
    }
    if let Some(prob) = &args.prob {
        config.prob = prob.to_path_buf();
    }
    if let Some(output) = &args.output {
        config.out = output.to_path_buf();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let Ok(config) = load_config(&args) else {
        std::process::exit(exitcode::CONFIG);
    };
    let greedy = csv_io::read_csv(&config.greedy)?;
    let prob = csv_io::read_csv(&config.prob)?;
    let merged = report::join_sources(greedy, prob)?;
    let table = report::build_table(&merged)?;
    csv_io::write_csv(table, &config.out)?;
    println!("OK -> {}", config.out.display());
    Ok(())
}
