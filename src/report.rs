use anyhow::Result;
use itertools::{izip, Itertools};
use polars::prelude::*;

use crate::datastructures::CANONICAL_DENSITIES;
use crate::instance_parser::clean_density;

/// Normalize the `p` column to plain floats and drop rows whose density
/// does not parse. String columns go through [`clean_density`]; numeric
/// columns are only cast.
pub fn normalize_density_column(df: DataFrame) -> Result<DataFrame> {
    let p = df.column("p")?;
    let cleaned: Vec<Option<f64>> = match p.dtype() {
        DataType::Utf8 => p
            .utf8()?
            .into_iter()
            .map(|raw| raw.and_then(clean_density))
            .collect(),
        _ => p.cast(&DataType::Float64)?.f64()?.into_iter().collect(),
    };
    let mut df = df;
    df.with_column(Series::new("p", cleaned))?;
    Ok(df.lazy().filter(col("p").is_not_null()).collect()?)
}

/// Outer-join greedy and probabilistic greedy aggregates on `(n, p)`.
/// Rows present in only one source are kept, with the counterpart
/// statistics null. Probabilistic columns are renamed `prob_*`.
pub fn join_sources(greedy: DataFrame, prob: DataFrame) -> Result<DataFrame> {
    let keep = |df: DataFrame| -> Result<DataFrame> {
        Ok(df
            .lazy()
            .select([
                col("n").cast(DataType::Int64),
                col("p"),
                col("mean_value").cast(DataType::Float64),
                col("mean_time").cast(DataType::Float64),
            ])
            .collect()?)
    };
    let greedy = keep(normalize_density_column(greedy)?)?;
    let prob = keep(normalize_density_column(prob)?)?
        .lazy()
        .rename(
            ["mean_value", "mean_time"],
            ["prob_mean_value", "prob_mean_time"],
        )
        .collect()?;
    Ok(greedy.outer_join(&prob, ["n", "p"], ["n", "p"])?)
}

struct JoinedRow {
    n: i64,
    p: f64,
    mean_value: Option<f64>,
    mean_time: Option<f64>,
    prob_mean_value: Option<f64>,
    prob_mean_time: Option<f64>,
}

/// Shape the joined aggregates into the report table: per distinct `n` one
/// header row (only the `N` cell set), then one row per canonical density.
/// Statistic cells are formatted to 3 decimals (values) and 6 decimals
/// (times), or left empty when no `(n, p)` match exists; the table goes
/// straight into typeset output, so blanks stay blanks.
pub fn build_table(merged: &DataFrame) -> Result<DataFrame> {
    let rows: Vec<JoinedRow> = izip!(
        merged.column("n")?.i64()?.into_iter(),
        merged.column("p")?.f64()?.into_iter(),
        merged.column("mean_value")?.f64()?.into_iter(),
        merged.column("mean_time")?.f64()?.into_iter(),
        merged.column("prob_mean_value")?.f64()?.into_iter(),
        merged.column("prob_mean_time")?.f64()?.into_iter(),
    )
    .filter_map(|(n, p, mean_value, mean_time, prob_value, prob_time)| {
        Some(JoinedRow {
            n: n?,
            p: p?,
            mean_value,
            mean_time,
            prob_mean_value: prob_value,
            prob_mean_time: prob_time,
        })
    })
    .collect();
    let n_values = rows.iter().map(|row| row.n).unique().sorted().collect_vec();

    let num_out_rows = n_values.len() * (1 + CANONICAL_DENSITIES.len());
    let mut n_cells = Vec::with_capacity(num_out_rows);
    let mut density_cells = Vec::with_capacity(num_out_rows);
    let mut greedy_value_cells = Vec::with_capacity(num_out_rows);
    let mut greedy_time_cells = Vec::with_capacity(num_out_rows);
    let mut prob_value_cells = Vec::with_capacity(num_out_rows);
    let mut prob_time_cells = Vec::with_capacity(num_out_rows);
    for n in n_values {
        n_cells.push(n.to_string());
        density_cells.push(String::new());
        greedy_value_cells.push(String::new());
        greedy_time_cells.push(String::new());
        prob_value_cells.push(String::new());
        prob_time_cells.push(String::new());
        for p in CANONICAL_DENSITIES {
            // first matching join row wins when (n, p) is duplicated
            let hit = rows
                .iter()
                .find(|row| row.n == n && (row.p - p).abs() < 1e-6);
            n_cells.push(String::new());
            density_cells.push(format!("{p:.1}"));
            match hit {
                Some(row) => {
                    greedy_value_cells.push(fmt_cell(row.mean_value, 3));
                    greedy_time_cells.push(fmt_cell(row.mean_time, 6));
                    prob_value_cells.push(fmt_cell(row.prob_mean_value, 3));
                    prob_time_cells.push(fmt_cell(row.prob_mean_time, 6));
                }
                None => {
                    greedy_value_cells.push(String::new());
                    greedy_time_cells.push(String::new());
                    prob_value_cells.push(String::new());
                    prob_time_cells.push(String::new());
                }
            }
        }
    }
    Ok(df! {
        "N" => n_cells,
        "densidad (p)" => density_cells,
        "Media Greedy" => greedy_value_cells,
        "promedio tiempo greedy" => greedy_time_cells,
        "Media Greedy Aleatorio" => prob_value_cells,
        "promedio tiempo aleatorio" => prob_time_cells,
    }?)
}

fn fmt_cell(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_default()
}
