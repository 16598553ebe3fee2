//! Win distribution chart: pie of winner frequencies

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{Result, analysis::win_counts, table::ReportTable};

use super::{WIN_DISTRIBUTION_FILE, chart_error};

const SLICE_COLORS: [RGBColor; 5] = [
    RGBColor(255, 153, 153),
    RGBColor(102, 179, 255),
    RGBColor(153, 221, 153),
    RGBColor(255, 204, 128),
    RGBColor(191, 153, 255),
];

/// Render the win distribution chart into `out_dir`.
///
/// Returns `Ok(None)` without writing anything when the table has no winner
/// column; the chart is conditional on that data existing.
pub fn render(table: &ReportTable, out_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(winners) = table.winner.as_ref() else {
        return Ok(None);
    };

    let counts = win_counts(winners);
    let path = out_dir.join(WIN_DISTRIBUTION_FILE);
    draw(&counts, &path).map_err(|source| chart_error(WIN_DISTRIBUTION_FILE, source))?;
    Ok(Some(path))
}

fn draw(
    counts: &[(String, usize)],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (600, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let plot_area = root.titled("Win Distribution", ("sans-serif", 24))?;

    let sizes: Vec<f64> = counts.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..counts.len())
        .map(|slice| SLICE_COLORS[slice % SLICE_COLORS.len()])
        .collect();

    let (width, height) = plot_area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
    plot_area.draw(&pie)?;

    root.present()?;
    Ok(())
}
