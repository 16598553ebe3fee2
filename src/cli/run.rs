//! Run command - generate the full diagnostic report for one game log

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    analysis::stats::ScoreSummary,
    charts,
    cli::output::{create_spinner, format_number, print_kv, print_section},
    loader,
    repair::{self, PRODUCER_SHIFT_V1, ShiftSignature},
    table::ReportTable,
};

#[derive(Parser, Debug)]
#[command(
    name = "gamelog",
    version,
    about = "Generate diagnostic charts from a game results log",
    long_about = None
)]
pub struct RunArgs {
    /// Path to the game results CSV
    #[arg(long, short = 'i', default_value = "learning_results.csv")]
    pub input: PathBuf,

    /// Directory the chart PNGs are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Suppress the progress spinner
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct SignatureInfo {
    name: String,
    version: u32,
}

impl From<&ShiftSignature> for SignatureInfo {
    fn from(signature: &ShiftSignature) -> Self {
        Self {
            name: signature.name.to_string(),
            version: signature.version,
        }
    }
}

#[derive(Debug, Serialize)]
struct RunSummaryFile {
    input: String,
    rows: usize,
    shift_detected: bool,
    signature: Option<SignatureInfo>,
    scores: ScoreSummary,
    charts: Vec<String>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("report_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

pub fn execute(args: RunArgs) -> Result<()> {
    print_section("Game Log Report");
    print_kv("Input", &args.input.display().to_string());

    let spinner = (!args.quiet).then(|| create_spinner("Loading game log..."));
    let raw = loader::load(&args.input)
        .with_context(|| format!("failed to load game log from {}", args.input.display()))?;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    println!(
        "\nData loaded: {} rows. Checking column alignment...",
        format_number(raw.len())
    );

    let shifted = repair::detect_shift(&raw).context("failed to inspect the HGAScore column")?;
    let (table, signature) = if shifted {
        println!(
            "WARNING: column shift detected. Rebuilding table from signature {} v{}...",
            PRODUCER_SHIFT_V1.name, PRODUCER_SHIFT_V1.version
        );
        let repaired = repair::repair(&raw, &PRODUCER_SHIFT_V1);
        println!("Table repaired: {} rows remapped.", repaired.len());
        (repaired, Some(&PRODUCER_SHIFT_V1))
    } else {
        println!("Data format looks well-formed.");
        let table = ReportTable::from_declared(&raw)
            .context("well-formed table is missing required columns")?;
        (table, None)
    };

    let scores = ScoreSummary::from_table(&table);
    print_score_summary(&scores);

    print_section("Charts");
    std::fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.out_dir.display()
        )
    })?;

    let mut written: Vec<PathBuf> = Vec::new();

    let path = charts::render_score_trend(&table, &args.out_dir)?;
    println!("✓ Chart saved: {}", path.display());
    written.push(path);

    let path = charts::render_exploration(&table, &args.out_dir)?;
    println!("✓ Chart saved: {}", path.display());
    written.push(path);

    match charts::render_win_distribution(&table, &args.out_dir)? {
        Some(path) => {
            println!("✓ Chart saved: {}", path.display());
            written.push(path);
        }
        None => println!("- Win distribution skipped (no winner column)."),
    }

    match charts::render_fitness(&table, &args.out_dir)? {
        Some(path) => {
            println!("✓ Chart saved: {}", path.display());
            written.push(path);
        }
        None => println!("- Fitness by generation skipped (no GA columns)."),
    }

    if let Some(raw_path) = &args.summary {
        let summary_path = sanitize_summary_path(raw_path);
        if summary_path != *raw_path {
            println!(
                "\n⚠️  Normalizing summary path to {}",
                summary_path.display()
            );
        }
        if let Some(parent) = summary_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let summary = RunSummaryFile {
            input: args.input.display().to_string(),
            rows: table.len(),
            shift_detected: shifted,
            signature: signature.map(SignatureInfo::from),
            scores,
            charts: written
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        };

        let file = File::create(&summary_path)?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", summary_path.display());
    }

    println!("\nReport complete.");
    Ok(())
}

fn print_score_summary(scores: &ScoreSummary) {
    print_section("Score Statistics");
    print_kv("Games", &format_number(scores.games));
    print_kv(
        "Q-Learning mean",
        &format_stat(scores.q_learning.mean, scores.q_learning.std_dev),
    );
    print_kv("HGA mean", &format_stat(scores.hga.mean, scores.hga.std_dev));

    if let Some(rates) = &scores.win_rates {
        for rate in rates {
            print_kv(
                &rate.label,
                &format!("{} wins ({:.1}%)", rate.wins, rate.rate * 100.0),
            );
        }
    }
}

fn format_stat(mean: Option<f64>, std_dev: Option<f64>) -> String {
    match (mean, std_dev) {
        (Some(mean), Some(std_dev)) => format!("{mean:.2} (±{std_dev:.2})"),
        (Some(mean), None) => format!("{mean:.2}"),
        _ => "n/a".to_string(),
    }
}
