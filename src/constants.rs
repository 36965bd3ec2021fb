// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// --- Physical Constants ---
pub const GRAVITY_M_S2: f64 = 9.81;
pub const SEA_WATER_DENSITY_KG_M3: f64 = 1025.0;
// Dynamic viscosity of the test water (Pa·s).
pub const WATER_DYNAMIC_VISCOSITY_PA_S: f64 = 1.07e-3;

// --- Theoretical particle presets ---
pub const KAOLINITE_DENSITY_KG_M3: f64 = 2650.0;
pub const KAOLINITE_DIAMETER_M: f64 = 4.0e-6;
pub const SAND_DENSITY_KG_M3: f64 = 2650.0;
pub const SAND_DIAMETER_M: f64 = 100.0e-6;
pub const TEST_SEDIMENT_DENSITY_KG_M3: f64 = 2620.0;
pub const TEST_SEDIMENT_DIAMETER_M: f64 = 8.5e-6;

// --- Spreadsheet layout ---
// Rows above this index hold titles and column headers.
pub const DATA_START_ROW: usize = 4;
pub const TIME_COLUMN: usize = 7;
// (column index, sample density in kg/m3), in sheet order.
pub const HEIGHT_COLUMNS: [(usize, f64); 5] = [
    (8, 1157.0),
    (9, 1134.0),
    (10, 1123.0),
    (11, 1096.0),
    (12, 1072.0),
];

// --- Unit conversions ---
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MILLIMETERS_PER_METER: f64 = 1000.0;

// --- Regression ---
pub const MIN_REGRESSION_POINTS: usize = 2;

// --- Report table ---
pub const TABLE_LABEL_WIDTH: usize = 10;
pub const TABLE_VELOCITY_WIDTH: usize = 12;
pub const TABLE_R_SQUARED_WIDTH: usize = 8;
pub const TABLE_RULE_WIDTH: usize = 40;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 16;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---
// One colour per height column, in sheet order.
pub const SAMPLE_COLORS: [&RGBColor; 5] = [&BLUE, &ORANGE, &GREEN, &RED, &PURPLE];
pub const RAW_POINT_OPACITY_FIT_PLOT: f64 = 0.3;
pub const POINT_RADIUS_PX: u32 = 4;

// Stroke widths for lines
pub const LINE_WIDTH_FIT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Output file suffixes
pub const RAW_DATA_PLOT_SUFFIX: &str = "raw_data";
pub const LINEAR_FITS_PLOT_SUFFIX: &str = "linear_fits";

// src/constants.rs
