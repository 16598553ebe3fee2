//! Diagnostic chart rendering
//!
//! Four independent renderers, each consuming the final [`ReportTable`] and
//! writing one PNG with a fixed filename. The win-distribution and
//! fitness-by-generation charts are conditional on their columns being
//! present; the other two assume the core columns, which both the repairer
//! and the well-formed validation guarantee.

use std::ops::Range;

use crate::error::Error;

pub mod exploration;
pub mod fitness;
pub mod score_trend;
pub mod win_distribution;

pub use exploration::render as render_exploration;
pub use fitness::render as render_fitness;
pub use score_trend::render as render_score_trend;
pub use win_distribution::render as render_win_distribution;

/// Fixed output filename of the score trend chart.
pub const SCORE_TREND_FILE: &str = "grafik_1_skor_gelisimi.png";
/// Fixed output filename of the exploration analysis chart.
pub const EXPLORATION_FILE: &str = "grafik_2_qlearning_analiz.png";
/// Fixed output filename of the win distribution chart.
pub const WIN_DISTRIBUTION_FILE: &str = "grafik_3_kazanma_oranlari.png";
/// Fixed output filename of the fitness-by-generation chart.
pub const FITNESS_FILE: &str = "grafik_4_ga_fitness.png";

pub(crate) fn chart_error(chart: &str, source: Box<dyn std::error::Error>) -> Error {
    Error::Chart {
        chart: chart.to_string(),
        message: source.to_string(),
    }
}

/// Axis range over the finite values of a series, padded on both sides.
///
/// Degenerate inputs (no finite values, or a flat series) get fallback
/// ranges so an empty or constant table still renders instead of failing.
pub(crate) fn axis_range(values: impl Iterator<Item = f64>, pad_fraction: f64) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for value in values.filter(|value| value.is_finite()) {
        lo = lo.min(value);
        hi = hi.max(value);
    }

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if (hi - lo).abs() < f64::EPSILON {
        let pad = lo.abs().max(1.0) * 0.05;
        return (lo - pad)..(hi + pad);
    }

    let pad = (hi - lo) * pad_fraction;
    (lo - pad)..(hi + pad)
}
