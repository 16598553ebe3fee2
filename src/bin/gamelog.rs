//! gamelog CLI - diagnostic report generation for agent-comparison game logs
//!
//! Reads a game results CSV (by default `learning_results.csv` in the
//! working directory), repairs the producer's known column-shift defect when
//! present, and writes the four diagnostic chart PNGs.

use anyhow::Result;
use clap::Parser;

use gamelog::cli::run::{RunArgs, execute};

fn main() -> Result<()> {
    let args = RunArgs::parse();
    execute(args)
}
