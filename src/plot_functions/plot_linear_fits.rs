// src/plot_functions/plot_linear_fits.rs

use std::error::Error;

use crate::constants::{
    LINEAR_FITS_PLOT_SUFFIX, LINE_WIDTH_FIT, POINT_RADIUS_PX, RAW_POINT_OPACITY_FIT_PLOT,
};
use crate::data_analysis::experiments::ExperimentResult;
use crate::plot_framework::{data_ranges, ChartRenderer, PlotConfig, PlotSeries, SeriesStyle};
use crate::plot_functions::sample_color;

/// Faded raw points plus the fitted line for each sample, in the order given.
/// Callers pass results in sheet order so colours match the raw data plot.
pub fn linear_fits_plot_config(results: &[ExperimentResult]) -> PlotConfig {
    let mut series = Vec::with_capacity(results.len() * 2);
    for (index, result) in results.iter().enumerate() {
        let color = sample_color(index);
        series.push(PlotSeries {
            data: result
                .fit
                .fitted_time
                .iter()
                .copied()
                .zip(result.heights_m.iter().copied())
                .collect(),
            label: format!("Density {}", result.label),
            color,
            opacity: RAW_POINT_OPACITY_FIT_PLOT,
            style: SeriesStyle::Points {
                radius: POINT_RADIUS_PX,
            },
        });
        series.push(PlotSeries {
            data: result
                .fit
                .fitted_time
                .iter()
                .copied()
                .zip(result.fit.fitted_height.iter().copied())
                .collect(),
            label: String::new(),
            color,
            opacity: 1.0,
            style: SeriesStyle::Line {
                stroke_width: LINE_WIDTH_FIT,
            },
        });
    }

    let (x_range, y_range) =
        data_ranges(series.iter().flat_map(|s| s.data.iter())).unwrap_or((0.0..1.0, 0.0..1.0));

    PlotConfig {
        title: "Sedimentation Data & Linear Fits".to_string(),
        x_range,
        y_range,
        series,
        x_label: "Time (s)".to_string(),
        y_label: "Height (m)".to_string(),
    }
}

/// Generates the scatter + linear fit overlay plot
pub fn plot_linear_fits(
    results: &[ExperimentResult],
    renderer: &mut dyn ChartRenderer,
) -> Result<(), Box<dyn Error>> {
    renderer.render(LINEAR_FITS_PLOT_SUFFIX, &linear_fits_plot_config(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::regression::linear_regression;

    #[test]
    fn test_points_and_line_per_sample() {
        let time = vec![0.0, 60.0, 120.0];
        let heights = vec![0.30, 0.29, 0.27];
        let result = ExperimentResult {
            label: "1096".to_string(),
            density_kg_m3: 1096.0,
            heights_m: heights.clone(),
            fit: linear_regression(&time, &heights).unwrap(),
        };

        let config = linear_fits_plot_config(&[result]);
        assert_eq!(config.series.len(), 2);

        let points = &config.series[0];
        assert_eq!(points.label, "Density 1096");
        assert_eq!(points.opacity, RAW_POINT_OPACITY_FIT_PLOT);
        assert!(matches!(points.style, SeriesStyle::Points { .. }));
        assert_eq!(points.data[2], (120.0, 0.27));

        let line = &config.series[1];
        assert!(line.label.is_empty());
        assert_eq!(line.color, points.color);
        assert_eq!(line.data.len(), 3);
        assert!(matches!(line.style, SeriesStyle::Line { stroke_width: 2 }));
    }
}

// src/plot_functions/plot_linear_fits.rs
