use anyhow::Result;
use itertools::Itertools;
use log::warn;
use polars::{lazy::dsl::GetOutput, prelude::*};

use crate::datastructures::ParseMode;
use crate::instance_parser::{bucket_density, parse_instance};

/// Parse the `instance` column and attach the recovered parameters as `n`
/// and `p` columns. Under [`ParseMode::Lenient`] unparseable rows get null
/// parameters; under [`ParseMode::Strict`] the first unparseable name aborts.
pub fn attach_instance_params(
    df: DataFrame,
    mode: ParseMode,
) -> Result<DataFrame> {
    let mut ns: Vec<Option<i64>> = Vec::with_capacity(df.height());
    let mut ps: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for raw in df.column("instance")?.utf8()?.into_iter() {
        let params = match raw {
            Some(raw) => parse_instance(raw, mode)?,
            None => None,
        };
        ns.push(params.map(|params| params.n));
        ps.push(params.map(|params| params.p));
    }
    let mut df = df;
    df.with_column(Series::new("n", ns))?;
    df.with_column(Series::new("p", ps))?;
    Ok(df)
}

/// Aggregate GA+LS results by `(n, p)`, with raw densities bucketed onto
/// the canonical tenths grid first.
///
/// Expects `instance`, `mis_size` and `solve_time` columns; produces
/// `n, p, GA_LS_med, GA_LS_dev, GA_LS_t` rows sorted by `(n, p)`, rounded
/// to the precision used by the report tables.
pub fn aggregate_ga_ls(df: DataFrame) -> Result<DataFrame> {
    let parsed = attach_instance_params(df, ParseMode::Strict)?;
    let aggregated = parsed
        .lazy()
        .with_column(col("p").apply(
            |s: Series| Ok(Some(s.f64()?.apply_values(bucket_density).into_series())),
            GetOutput::from_type(DataType::Float64),
        ))
        .group_by([col("n"), col("p")])
        .agg([
            mean("mis_size").alias("GA_LS_med"),
            col("mis_size").std(1).alias("GA_LS_dev"),
            mean("solve_time").alias("GA_LS_t"),
        ])
        .with_columns([
            round_to("GA_LS_med", 3),
            round_to("GA_LS_dev", 3),
            round_to("GA_LS_t", 6),
        ])
        .sort_by_exprs(&[col("n"), col("p")], vec![false, false], false)
        .collect()?;
    Ok(aggregated)
}

/// Aggregate the SA calibration grid by `(n, p, T0, alpha, seconds)`.
///
/// Expects `instance`, `best_value`, `best_time`, `seconds`, `T0` and
/// `alpha` columns. Rows whose instance name does not parse are excluded
/// (and counted in a warning); the sample standard deviation of singleton
/// groups stays null.
pub fn aggregate_sa(df: DataFrame) -> Result<DataFrame> {
    let parsed = attach_instance_params(df, ParseMode::Lenient)?;
    let dropped = parsed.column("n")?.null_count();
    if dropped > 0 {
        warn!("excluding {dropped} rows with unparseable instance names");
    }
    let keys = ["n", "p", "T0", "alpha", "seconds"];
    let key_exprs = keys.iter().map(|k| col(k)).collect_vec();
    let aggregated = parsed
        .lazy()
        .filter(col("n").is_not_null())
        .group_by(key_exprs.clone())
        .agg([
            count().alias("count"),
            mean("best_value").alias("mean_best"),
            col("best_value").std(1).alias("std_best"),
            min("best_value").alias("min_best"),
            max("best_value").alias("max_best"),
            mean("best_time").alias("mean_time_to_best"),
            col("best_time").std(1).alias("std_time_to_best"),
        ])
        .sort_by_exprs(&key_exprs, vec![false; keys.len()], false)
        .collect()?;
    Ok(aggregated)
}

fn round_to(name: &str, decimals: i32) -> Expr {
    let factor = 10_f64.powi(decimals);
    col(name).apply(
        move |s: Series| {
            Ok(Some(
                s.f64()?
                    .apply_values(|v| (v * factor).round() / factor)
                    .into_series(),
            ))
        },
        GetOutput::from_type(DataType::Float64),
    )
}

#[cfg(test)]
mod tests;
