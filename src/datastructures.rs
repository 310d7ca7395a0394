use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The density grid used by the report table, regardless of the finer
/// granularity of raw instance densities.
pub const CANONICAL_DENSITIES: [f64; 9] =
    [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// How instance-name parse failures are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// A name that does not match the expected pattern aborts the run.
    /// Used for curated result batches where a malformed name is a tooling
    /// error that must not silently skew statistics.
    Strict,
    /// A name that does not parse yields no parameters and the record is
    /// excluded from aggregation. Used for large grid-search output where a
    /// few malformed rows must not kill the job.
    Lenient,
}

/// Parameters of a generated instance, recovered from its file name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceParams {
    /// Number of vertices.
    pub n: i64,
    /// Edge density of the generator.
    pub p: f64,
}

impl InstanceParams {
    /// Pair up a problem size and a density.
    pub fn new(n: i64, p: f64) -> Self {
        Self { n, p }
    }
}

/// Input and output paths of the report table builder. Read from a json
/// config, each field individually optional; missing fields fall back to the
/// file names the solver scripts produce.
#[derive(Serialize, Deserialize, Clone)]
pub struct TableConfig {
    /// CSV with aggregated greedy results.
    #[serde(default = "default_greedy")]
    pub greedy: PathBuf,
    /// CSV with aggregated probabilistic greedy results.
    #[serde(default = "default_prob")]
    pub prob: PathBuf,
    /// Where to write the report table.
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            greedy: default_greedy(),
            prob: default_prob(),
            out: default_out(),
        }
    }
}

fn default_greedy() -> PathBuf {
    PathBuf::from("results_greedy_all.csv")
}

fn default_prob() -> PathBuf {
    PathBuf::from("results_prob_a10_all.csv")
}

fn default_out() -> PathBuf {
    PathBuf::from("tabla_pauta.csv")
}
