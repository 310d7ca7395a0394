#![warn(missing_docs)]
//! Aggregate experiment results of Maximum Independent Set heuristics.
//!
//! The solvers (GA + local search, simulated annealing, greedy and
//! probabilistic greedy constructions) write one CSV row per run, with the
//! experiment parameters encoded in the instance file name, e.g.
//! `erdos_n1000_p0c0.05_1.graph`. This crate recovers the `(n, p)` parameters
//! from those names, groups runs by parameter tuple, computes summary
//! statistics and shapes them into report-ready CSVs.
//!
//! Three executables cover the three post-processing pipelines:
//! `aggregate_ga_ls` (GA+LS results), `aggregate_sa` (SA calibration grid)
//! and `make_table` (greedy vs. probabilistic greedy report table); see
//! their `--help` output for the expected columns and default paths.
//!
//! Instance-name parsing comes in two policies. GA+LS results are a curated
//! batch, so an unparseable name aborts the run. The SA grid is large and
//! occasionally contains malformed rows, so there parse failures degrade to
//! excluded records. The policy is explicit ([`datastructures::ParseMode`]),
//! not baked into the pipelines.
//!
//! Example
//! ```rust
//! use mis_aggregator::{aggregation, csv_io};
//! # use std::path::Path;
//! # use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     // expected header: instance,mis_size,solve_time
//!     let df = csv_io::read_csv(Path::new("ga_ls_final.csv"))?;
//!     let aggregated = aggregation::aggregate_ga_ls(df)?;
//!     csv_io::write_csv(aggregated, Path::new("ga_ls_aggregated.csv"))?;
//!     Ok(())
//! }
//! ```

/// Grouped aggregation of parsed result records for the GA+LS and SA
/// pipelines.
pub mod aggregation;

/// CSV reading and writing helpers shared by the pipelines.
pub mod csv_io;

/// Shared data structures: parse policies, parsed parameters and the report
/// table configuration.
pub mod datastructures;

/// Recovery of `(n, p)` parameters from instance names, density bucketing
/// and density normalization.
pub mod instance_parser;

/// Outer join of greedy and probabilistic greedy aggregates and the sparse
/// report table built from it.
pub mod report;
