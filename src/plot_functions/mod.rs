// src/plot_functions/mod.rs

use plotters::style::RGBColor;

use crate::constants::SAMPLE_COLORS;

pub mod plot_linear_fits;
pub mod plot_raw_data;

/// Colour for the sample at `index` in sheet order, cycling if there are more samples than colours.
pub fn sample_color(index: usize) -> RGBColor {
    *SAMPLE_COLORS[index % SAMPLE_COLORS.len()]
}

// src/plot_functions/mod.rs
