//! Full report runs through the CLI command layer.

use clap::Parser;
use gamelog::cli::run::{RunArgs, execute};
use tempfile::tempdir;

mod common;

fn parse_args<I, T>(args: I) -> RunArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RunArgs::parse_from(args)
}

#[test]
fn shifted_log_produces_all_four_charts_and_a_summary() {
    let tmp = tempdir().unwrap();
    let rows = common::shifted_rows(15);
    let input = common::write_csv(tmp.path(), "learning_results.csv", common::LOG_HEADER, &rows);
    let out_dir = tmp.path().join("charts");
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "gamelog",
        "--input",
        input.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--summary",
        summary_stem.to_str().unwrap(),
        "--quiet",
    ]);

    execute(args).expect("report generation should succeed");

    for chart in [
        "grafik_1_skor_gelisimi.png",
        "grafik_2_qlearning_analiz.png",
        "grafik_3_kazanma_oranlari.png",
        "grafik_4_ga_fitness.png",
    ] {
        assert!(
            out_dir.join(chart).exists(),
            "expected chart {chart} to be written"
        );
    }

    // Summary path without extension gets .json appended.
    let summary_path = summary_stem.with_extension("json");
    assert!(
        summary_path.exists(),
        "expected summary at {}",
        summary_path.display()
    );

    let contents = std::fs::read_to_string(&summary_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["rows"], 15);
    assert_eq!(parsed["shift_detected"], true);
    assert_eq!(parsed["signature"]["name"], "producer-shift");
    assert_eq!(parsed["signature"]["version"], 1);
    assert_eq!(parsed["charts"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["scores"]["games"], 15);
}

#[test]
fn well_formed_log_without_ga_columns_skips_conditional_charts() {
    let tmp = tempdir().unwrap();
    let rows: Vec<String> = (1..=10)
        .map(|game| format!("{game},{},{},0.5", 10 + game, 20 + game))
        .collect();
    let input = common::write_csv(
        tmp.path(),
        "learning_results.csv",
        "GameNumber,QLearningScore,HGAScore,QLearningEpsilon",
        &rows,
    );
    let out_dir = tmp.path().join("charts");

    let args = parse_args([
        "gamelog",
        "--input",
        input.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--quiet",
    ]);

    execute(args).expect("report generation should succeed");

    assert!(out_dir.join("grafik_1_skor_gelisimi.png").exists());
    assert!(out_dir.join("grafik_2_qlearning_analiz.png").exists());
    assert!(!out_dir.join("grafik_3_kazanma_oranlari.png").exists());
    assert!(!out_dir.join("grafik_4_ga_fitness.png").exists());
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let rows = common::shifted_rows(8);
    let input = common::write_csv(tmp.path(), "learning_results.csv", common::LOG_HEADER, &rows);
    let out_dir = tmp.path().join("charts");
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}/", summary_dir.display());

    let args = parse_args([
        "gamelog",
        "--input",
        input.to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--summary",
        &summary_arg,
        "--quiet",
    ]);

    execute(args).expect("report generation should succeed");

    let expected_path = summary_dir.join("report_summary.json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );
}

#[test]
fn missing_input_file_fails_without_charts() {
    let tmp = tempdir().unwrap();
    let out_dir = tmp.path().join("charts");

    let args = parse_args([
        "gamelog",
        "--input",
        tmp.path().join("does_not_exist.csv").to_str().unwrap(),
        "--out-dir",
        out_dir.to_str().unwrap(),
        "--quiet",
    ]);

    assert!(execute(args).is_err());
    assert!(!out_dir.join("grafik_1_skor_gelisimi.png").exists());
}
