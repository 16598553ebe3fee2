//! Exploration analysis chart: score against exploration rate on dual axes

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{Result, table::ReportTable};

use super::{EXPLORATION_FILE, axis_range, chart_error};

const SCORE_COLOR: RGBColor = BLUE;
const EPSILON_COLOR: RGBColor = RGBColor(255, 140, 0);

/// Render the exploration analysis chart into `out_dir` and return the
/// written path.
pub fn render(table: &ReportTable, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(EXPLORATION_FILE);
    draw(table, &path).map_err(|source| chart_error(EXPLORATION_FILE, source))?;
    Ok(path)
}

fn draw(table: &ReportTable, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let score_points: Vec<(f64, f64)> = table
        .game_number
        .iter()
        .zip(&table.q_learning_score)
        .filter_map(|(x, y)| y.map(|y| (*x, y)))
        .collect();
    let epsilon_points: Vec<(f64, f64)> = table
        .game_number
        .iter()
        .zip(&table.q_learning_epsilon)
        .filter_map(|(x, y)| y.map(|y| (*x, y)))
        .collect();

    let x_range = axis_range(table.game_number.iter().copied(), 0.02);
    let score_range = axis_range(score_points.iter().map(|(_, y)| *y), 0.05);
    // Epsilon lives in [0, 1] after unit conversion; leave headroom in case
    // the source wrote something larger.
    let epsilon_top = epsilon_points
        .iter()
        .map(|(_, y)| *y)
        .fold(1.0f64, f64::max)
        * 1.05;

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Q-Learning: Exploration Rate vs Performance",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), score_range)?
        .set_secondary_coord(x_range, 0.0..epsilon_top);

    chart
        .configure_mesh()
        .x_desc("Game")
        .y_desc("Score")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Epsilon (exploration)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(score_points, SCORE_COLOR.mix(0.6)))?
        .label("Score")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SCORE_COLOR));

    chart
        .draw_secondary_series(LineSeries::new(
            epsilon_points,
            EPSILON_COLOR.stroke_width(2),
        ))?
        .label("Epsilon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], EPSILON_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
