//! Fitness-by-generation chart: best GA fitness per generation

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{Result, analysis::max_fitness_by_generation, table::ReportTable};

use super::{FITNESS_FILE, axis_range, chart_error};

const FITNESS_COLOR: RGBColor = GREEN;

/// Render the fitness-by-generation chart into `out_dir`.
///
/// Returns `Ok(None)` without writing anything unless both the generation
/// and best-fitness columns are present.
pub fn render(table: &ReportTable, out_dir: &Path) -> Result<Option<PathBuf>> {
    let (Some(generations), Some(fitness)) =
        (table.ga_generation.as_ref(), table.ga_best_fitness.as_ref())
    else {
        return Ok(None);
    };

    let series = max_fitness_by_generation(generations, fitness);
    let path = out_dir.join(FITNESS_FILE);
    draw(&series, &path).map_err(|source| chart_error(FITNESS_FILE, source))?;
    Ok(Some(path))
}

fn draw(
    series: &[(f64, f64)],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let x_range = axis_range(series.iter().map(|(generation, _)| *generation), 0.02);
    let y_range = axis_range(series.iter().map(|(_, best)| *best), 0.05);

    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Genetic Algorithm: Best Fitness by Generation",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Fitness")
        .draw()?;

    chart.draw_series(LineSeries::new(
        series.iter().copied(),
        FITNESS_COLOR.stroke_width(2),
    ))?;
    chart.draw_series(
        series
            .iter()
            .map(|(x, y)| Circle::new((*x, *y), 4, FITNESS_COLOR.filled())),
    )?;

    root.present()?;
    Ok(())
}
