// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Tick label text shared by both axes. Heights are fractions of a meter and
/// times run to thousands of seconds, so small values keep three decimals.
pub fn format_axis_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 100_000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else if magnitude < 1.0 {
        format!("{:.3}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeriesStyle {
    /// Unconnected markers
    Points { radius: u32 },
    Line { stroke_width: u32 },
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    /// Empty labels are left out of the legend.
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64, // 0.0 to 1.0
    pub style: SeriesStyle,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    pub fn has_valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// Padded (x, y) ranges covering every point, or `None` if there are no finite points.
pub fn data_ranges<'a, I>(points: I) -> Option<(Range<f64>, Range<f64>)>
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_min.is_infinite() || y_min.is_infinite() {
        return None;
    }
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    Some((x_lo..x_hi, y_lo..y_hi))
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message<DB>(
    area: &DrawingArea<DB, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0) as i32;
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width);
    let estimated_text_height = (lines.len() as i32).saturating_mul(estimated_line_height);

    let center_x = width / 2 - estimated_text_width / 2;
    let center_y = height / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Draws one chart described by `plot_config` on any plotters backend.
pub fn draw_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_tick(*x))
        .y_label_formatter(&|y| format_axis_tick(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color.mix(s.opacity);
        // Legend swatches are drawn opaque so faded scatter stays readable.
        let legend_color = s.color;

        match s.style {
            SeriesStyle::Points { radius } => {
                let series = chart.draw_series(
                    s.data
                        .iter()
                        .map(move |&(x, y)| Circle::new((x, y), radius, color.filled())),
                )?;
                if !s.label.is_empty() {
                    series.label(s.label.as_str()).legend(move |(x, y)| {
                        Circle::new((x + 10, y), radius, legend_color.filled())
                    });
                    legend_series_count += 1;
                }
            }
            SeriesStyle::Line { stroke_width } => {
                let series = chart.draw_series(LineSeries::new(
                    s.data.iter().cloned(),
                    color.stroke_width(stroke_width),
                ))?;
                if !s.label.is_empty() {
                    series.label(s.label.as_str()).legend(move |(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            legend_color.stroke_width(LINE_WIDTH_LEGEND),
                        )
                    });
                    legend_series_count += 1;
                }
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Where finished charts go.
pub trait ChartRenderer {
    /// `plot_name` distinguishes charts from the same run (e.g. "raw_data").
    fn render(&mut self, plot_name: &str, plot_config: &PlotConfig) -> Result<(), Box<dyn Error>>;
}

/// Writes each chart as `<root_name>_<plot_name>.png` in `output_dir`.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    output_dir: PathBuf,
    root_name: String,
}

impl PngRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, root_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            root_name: root_name.into(),
        }
    }

    pub fn output_path(&self, plot_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.png", self.root_name, plot_name))
    }

    fn draw_to_file(&self, path: &Path, plot_config: &PlotConfig) -> Result<bool, Box<dyn Error>> {
        let root_area = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root_area.fill(&WHITE)?;
        root_area.draw(&Text::new(
            self.root_name.as_str(),
            (10, 10),
            FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
        ))?;
        let margined_root_area = root_area.margin(50, 5, 5, 5);

        let plotted = if plot_config.has_data() && plot_config.has_valid_ranges() {
            draw_chart(&margined_root_area, plot_config)?;
            true
        } else {
            let reason = if !plot_config.has_data() {
                "No data points"
            } else {
                "Invalid ranges"
            };
            draw_unavailable_message(&margined_root_area, &plot_config.title, reason)?;
            false
        };
        root_area.present()?;
        Ok(plotted)
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&mut self, plot_name: &str, plot_config: &PlotConfig) -> Result<(), Box<dyn Error>> {
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir)?;
        }
        let path = self.output_path(plot_name);
        debug!(path = %path.display(), series = plot_config.series.len(), "rendering chart");

        if self.draw_to_file(&path, plot_config)? {
            println!("  Plot saved as '{}'.", path.display());
        } else {
            println!(
                "  '{}' saved with a placeholder message only: no data available to plot.",
                path.display()
            );
        }
        Ok(())
    }
}


// src/plot_framework.rs
