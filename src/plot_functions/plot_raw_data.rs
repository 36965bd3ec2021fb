// src/plot_functions/plot_raw_data.rs

use std::error::Error;

use crate::constants::{POINT_RADIUS_PX, RAW_DATA_PLOT_SUFFIX};
use crate::data_input::sample_data::SedimentationData;
use crate::plot_framework::{data_ranges, ChartRenderer, PlotConfig, PlotSeries, SeriesStyle};
use crate::plot_functions::sample_color;

/// Scatter of every sample's height against time, one colour per sample.
pub fn raw_data_plot_config(data: &SedimentationData) -> PlotConfig {
    let series: Vec<PlotSeries> = data
        .samples
        .iter()
        .enumerate()
        .map(|(index, sample)| PlotSeries {
            data: data
                .time_s
                .iter()
                .copied()
                .zip(sample.heights_m.iter().copied())
                .collect(),
            label: format!("Density {} kg/m3", sample.label),
            color: sample_color(index),
            opacity: 1.0,
            style: SeriesStyle::Points {
                radius: POINT_RADIUS_PX,
            },
        })
        .collect();

    let (x_range, y_range) =
        data_ranges(series.iter().flat_map(|s| s.data.iter())).unwrap_or((0.0..1.0, 0.0..1.0));

    PlotConfig {
        title: "Sedimentation Data (Corrected Units)".to_string(),
        x_range,
        y_range,
        series,
        x_label: "Time (s)".to_string(),
        y_label: "Height (m)".to_string(),
    }
}

/// Generates the raw sedimentation scatter plot
pub fn plot_raw_data(
    data: &SedimentationData,
    renderer: &mut dyn ChartRenderer,
) -> Result<(), Box<dyn Error>> {
    renderer.render(RAW_DATA_PLOT_SUFFIX, &raw_data_plot_config(data))
}


// src/plot_functions/plot_raw_data.rs
