//! Score trend chart: moving-average score development for both agents

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{Result, analysis::moving_average, table::ReportTable};

use super::{SCORE_TREND_FILE, axis_range, chart_error};

/// Moving-average window in games.
const WINDOW: usize = 5;

const Q_COLOR: RGBColor = BLUE;
const HGA_COLOR: RGBColor = RED;

/// Render the score trend chart into `out_dir` and return the written path.
pub fn render(table: &ReportTable, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(SCORE_TREND_FILE);
    draw(table, &path).map_err(|source| chart_error(SCORE_TREND_FILE, source))?;
    Ok(path)
}

fn draw(table: &ReportTable, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let q_trend = series_points(&table.game_number, &moving_average(&table.q_learning_score, WINDOW));
    let hga_trend = series_points(&table.game_number, &moving_average(&table.hga_score, WINDOW));
    let q_raw = series_points(&table.game_number, &table.q_learning_score);
    let hga_raw = series_points(&table.game_number, &table.hga_score);

    let x_range = axis_range(table.game_number.iter().copied(), 0.02);
    let y_range = axis_range(
        q_raw.iter().chain(&hga_raw).map(|(_, score)| *score),
        0.05,
    );

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("AI Score Development (Total {} Games)", table.len()),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Game")
        .y_desc("Score (moving average)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(q_trend, Q_COLOR.stroke_width(2)))?
        .label("Q-Learning (trend)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], Q_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(hga_trend, HGA_COLOR.stroke_width(2)))?
        .label("HGA (trend)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], HGA_COLOR.stroke_width(2)));

    // Raw per-game scores behind the trend lines.
    chart.draw_series(
        q_raw
            .into_iter()
            .map(|(x, y)| Circle::new((x, y), 3, Q_COLOR.mix(0.2).filled())),
    )?;
    chart.draw_series(
        hga_raw
            .into_iter()
            .map(|(x, y)| Circle::new((x, y), 3, HGA_COLOR.mix(0.2).filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn series_points(xs: &[f64], ys: &[Option<f64>]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .filter_map(|(x, y)| y.map(|y| (*x, y)))
        .collect()
}
