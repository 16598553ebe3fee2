//! Series analysis feeding the chart renderer

pub mod stats;

use std::collections::HashMap;

/// Trailing moving average over a series with missing values.
///
/// The result has the same length as the input. The first `window - 1`
/// positions are undefined, and so is any position whose trailing window
/// covers a missing value; only complete windows produce a mean.
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut averaged = Vec::with_capacity(values.len());
    for end in 0..values.len() {
        if end + 1 < window {
            averaged.push(None);
            continue;
        }

        let mut sum = 0.0;
        let mut complete = true;
        for value in &values[end + 1 - window..=end] {
            match value {
                Some(v) => sum += v,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        averaged.push(complete.then(|| sum / window as f64));
    }
    averaged
}

/// Frequency of each distinct non-missing winner label.
///
/// Ordered by descending count, ties broken by label so the output is
/// deterministic.
pub fn win_counts(winners: &[Option<String>]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in winners.iter().flatten() {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }

    let mut ordered: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Maximum best-fitness per generation, ascending by generation.
///
/// Only rows where both values are present and finite contribute.
pub fn max_fitness_by_generation(
    generations: &[Option<f64>],
    fitness: &[Option<f64>],
) -> Vec<(f64, f64)> {
    let mut pairs: Vec<(f64, f64)> = generations
        .iter()
        .zip(fitness)
        .filter_map(|(generation, best)| match (generation, best) {
            (Some(g), Some(f)) if g.is_finite() && f.is_finite() => Some((*g, *f)),
            _ => None,
        })
        .collect();

    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut grouped: Vec<(f64, f64)> = Vec::new();
    for (generation, best) in pairs {
        match grouped.last_mut() {
            Some((last_generation, last_best)) if *last_generation == generation => {
                if best > *last_best {
                    *last_best = best;
                }
            }
            _ => grouped.push((generation, best)),
        }
    }
    grouped
}
