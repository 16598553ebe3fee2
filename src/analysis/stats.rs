//! Descriptive statistics for the console report and run summary

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::table::ReportTable;

use super::win_counts;

/// Mean and spread of one agent's per-game scores.
#[derive(Debug, Clone, Serialize)]
pub struct AgentScoreStats {
    pub samples: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

impl AgentScoreStats {
    /// Summarize the present, finite scores of one column.
    pub fn from_scores(scores: &[Option<f64>]) -> Self {
        let data: Vec<f64> = scores
            .iter()
            .flatten()
            .copied()
            .filter(|value| value.is_finite())
            .collect();

        let samples = data.len();
        Self {
            samples,
            mean: (samples > 0).then(|| (&data).mean()),
            // Sample standard deviation needs at least two observations.
            std_dev: (samples > 1).then(|| (&data).std_dev()),
        }
    }
}

/// One winner label's share of the decided games.
#[derive(Debug, Clone, Serialize)]
pub struct WinRate {
    pub label: String,
    pub wins: usize,
    pub rate: f64,
}

/// Full score summary of a run, printed to the console and embedded in the
/// optional summary JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub games: usize,
    pub q_learning: AgentScoreStats,
    pub hga: AgentScoreStats,
    pub win_rates: Option<Vec<WinRate>>,
}

impl ScoreSummary {
    /// Summarize a report table.
    pub fn from_table(table: &ReportTable) -> Self {
        let win_rates = table.winner.as_ref().map(|winners| {
            let counts = win_counts(winners);
            let total: usize = counts.iter().map(|(_, count)| count).sum();
            counts
                .into_iter()
                .map(|(label, wins)| WinRate {
                    label,
                    wins,
                    rate: if total > 0 {
                        wins as f64 / total as f64
                    } else {
                        0.0
                    },
                })
                .collect()
        });

        Self {
            games: table.len(),
            q_learning: AgentScoreStats::from_scores(&table.q_learning_score),
            hga: AgentScoreStats::from_scores(&table.hga_score),
            win_rates,
        }
    }
}
