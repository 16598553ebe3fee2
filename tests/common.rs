//! Common test utilities for the gamelog test suite.
//!
//! This module provides CSV fixture helpers used across multiple tests.

use std::path::{Path, PathBuf};

/// Declared header row of the producer's log. In the shifted case the
/// headers are still written like this while the values land at the wrong
/// positions.
pub const LOG_HEADER: &str =
    "GameNumber,QLearningScore,HGAScore,Winner,QLearningEpsilon,GAGeneration,GABestFitness";

/// Write a CSV file from a header and data lines, returning its path.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::from(header);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    std::fs::write(&path, contents).expect("failed to write test CSV");
    path
}

/// Rows as the shifted producer writes them: Q-Learning score, HGA score,
/// winner label, a junk cell, scaled epsilon, generation and best fitness,
/// all one position away from their declared headers.
pub fn shifted_rows(games: usize) -> Vec<String> {
    (0..games)
        .map(|game| {
            let winner = match game % 3 {
                0 => "Q-Learning",
                1 => "HGA",
                _ => "Draw",
            };
            format!(
                "{},{},{},x,{},{},{}",
                100 + game,
                200 + game,
                winner,
                900_usize.saturating_sub(game * 50),
                game / 3 + 1,
                50 + game * 2,
            )
        })
        .collect()
}
