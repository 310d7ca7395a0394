use polars::prelude::*;

use super::*;
use crate::datastructures::ParseMode;

#[test]
fn test_attach_instance_params() {
    let df = df! {
        "instance" => [
            "graphs/erdos_n50_p0c0.30_1.graph",
            "badname.graph",
        ],
        "best_value" => [10.0, 11.0],
    }
    .unwrap();
    let parsed = attach_instance_params(df, ParseMode::Lenient).unwrap();
    assert_eq!(parsed.column("n").unwrap().i64().unwrap().get(0), Some(50));
    assert_eq!(parsed.column("n").unwrap().null_count(), 1);
    assert_eq!(parsed.column("p").unwrap().f64().unwrap().get(0), Some(0.3));
}

#[test]
fn test_ga_ls_aggregation_on_shared_instance() {
    let df = df! {
        "instance" => [
            "graphs/erdos_n50_p0c0.30_1.graph",
            "graphs/erdos_n50_p0c0.30_2.graph",
        ],
        "mis_size" => [10i64, 12],
        "solve_time" => [0.5, 0.7],
    }
    .unwrap();
    let aggregated = aggregate_ga_ls(df).unwrap();
    assert_eq!(aggregated.height(), 1);
    assert_eq!(aggregated["n"], Series::new("n", &[50i64]));
    assert_eq!(aggregated["p"], Series::new("p", &[0.3]));
    assert_eq!(aggregated["GA_LS_med"], Series::new("GA_LS_med", &[11.0]));
    assert_eq!(aggregated["GA_LS_dev"], Series::new("GA_LS_dev", &[1.414]));
    assert_eq!(aggregated["GA_LS_t"], Series::new("GA_LS_t", &[0.6]));
}

#[test]
fn test_ga_ls_buckets_raw_densities() {
    let df = df! {
        "instance" => [
            "erdos_n100_p0c0.05_1.graph",
            "erdos_n100_p0c0.10_1.graph",
            "erdos_n100_p0c0.15_1.graph",
        ],
        "mis_size" => [30i64, 28, 26],
        "solve_time" => [0.1, 0.1, 0.1],
    }
    .unwrap();
    let aggregated = aggregate_ga_ls(df).unwrap();
    // 0.05 and 0.10 share the 0.1 bucket, 0.15 rounds up to 0.2
    assert_eq!(aggregated["p"], Series::new("p", &[0.1, 0.2]));
    assert_eq!(aggregated["GA_LS_med"], Series::new("GA_LS_med", &[29.0, 26.0]));
}

#[test]
fn test_ga_ls_strict_parse_aborts() {
    let df = df! {
        "instance" => ["graphs/erdos_n50_p0c0.30_1.graph", "mystery.graph"],
        "mis_size" => [10i64, 12],
        "solve_time" => [0.5, 0.7],
    }
    .unwrap();
    assert!(aggregate_ga_ls(df).is_err());
}

#[test]
fn test_single_record_group_has_missing_deviation() {
    let df = df! {
        "instance" => ["erdos_n50_p0c0.30_1.graph"],
        "mis_size" => [10i64],
        "solve_time" => [0.5],
    }
    .unwrap();
    let aggregated = aggregate_ga_ls(df).unwrap();
    assert_eq!(aggregated.height(), 1);
    assert_eq!(
        aggregated.column("GA_LS_dev").unwrap().f64().unwrap().get(0),
        None
    );
}

#[test]
fn test_sa_aggregation_skips_unparseable_rows() {
    let df = df! {
        "instance" => [
            "erdos_n1000_p0c0.05_1.graph",
            "erdos_n1000_p0c0.05_2.graph",
            "erdos_n1000_p0c0.05_3.graph",
            "badname.graph",
        ],
        "best_value" => [2.0, 4.0, 6.0, 99.0],
        "best_time" => [0.11, 0.13, 0.15, 0.5],
        "seconds" => [5i64, 5, 5, 5],
        "seed" => [1i64, 2, 3, 4],
        "T0" => [10.0, 10.0, 10.0, 10.0],
        "alpha" => [0.95, 0.95, 0.95, 0.95],
    }
    .unwrap();
    let aggregated = aggregate_sa(df).unwrap();
    assert_eq!(aggregated.height(), 1);
    assert_eq!(
        aggregated.column("count").unwrap().u32().unwrap().get(0),
        Some(3)
    );
    assert_eq!(aggregated["mean_best"], Series::new("mean_best", &[4.0]));
    assert_eq!(aggregated["std_best"], Series::new("std_best", &[2.0]));
    assert_eq!(aggregated["min_best"], Series::new("min_best", &[2.0]));
    assert_eq!(aggregated["max_best"], Series::new("max_best", &[6.0]));
    let mean_time = aggregated
        .column("mean_time_to_best")
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap();
    assert!((mean_time - 0.13).abs() < 1e-9);
}

#[test]
fn test_sa_aggregation_sorts_by_key_tuple() {
    let df = df! {
        "instance" => [
            "erdos_n500_p0c0.10_1.graph",
            "erdos_n100_p0c0.10_1.graph",
            "erdos_n100_p0c0.05_1.graph",
        ],
        "best_value" => [1.0, 2.0, 3.0],
        "best_time" => [0.1, 0.2, 0.3],
        "seconds" => [5i64, 5, 5],
        "seed" => [1i64, 1, 1],
        "T0" => [10.0, 10.0, 10.0],
        "alpha" => [0.95, 0.95, 0.95],
    }
    .unwrap();
    let aggregated = aggregate_sa(df).unwrap();
    assert_eq!(aggregated["n"], Series::new("n", &[100i64, 100, 500]));
    assert_eq!(aggregated["p"], Series::new("p", &[0.05, 0.1, 0.1]));
}
