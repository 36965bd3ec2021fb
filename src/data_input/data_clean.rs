// src/data_input/data_clean.rs

use tracing::{debug, warn};

use crate::constants::{
    DATA_START_ROW, HEIGHT_COLUMNS, MILLIMETERS_PER_METER, SECONDS_PER_MINUTE, TIME_COLUMN,
};
use crate::data_input::sample_data::{DensitySample, SedimentationData};
use crate::data_input::table::Table;

/// Coerces one column to numbers, starting at `first_row`.
///
/// Empty, non-numeric and NaN cells are dropped, as are cells missing because
/// a row ends before `column`. Order of the remaining values is preserved.
pub fn extract_numeric_column(table: &Table, column: usize, first_row: usize) -> Vec<f64> {
    let mut values = Vec::new();
    let mut dropped = 0usize;
    for row in first_row..table.row_count() {
        match table
            .cell(row, column)
            .and_then(|cell| cell.parse::<f64>().ok())
            .filter(|v| !v.is_nan())
        {
            Some(v) => values.push(v),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(column, dropped, kept = values.len(), "dropped non-numeric cells");
    }
    values
}

pub fn minutes_to_seconds(minutes: &[f64]) -> Vec<f64> {
    minutes.iter().map(|m| m * SECONDS_PER_MINUTE).collect()
}

pub fn millimeters_to_meters(millimeters: &[f64]) -> Vec<f64> {
    millimeters.iter().map(|mm| mm / MILLIMETERS_PER_METER).collect()
}

/// Extracts the time column (minutes → seconds) and every height column
/// (mm → m) from the fixed sheet layout.
pub fn data_clean(table: &Table) -> SedimentationData {
    let time_s = minutes_to_seconds(&extract_numeric_column(table, TIME_COLUMN, DATA_START_ROW));

    let samples: Vec<DensitySample> = HEIGHT_COLUMNS
        .iter()
        .map(|&(column, density_kg_m3)| {
            let heights_mm = extract_numeric_column(table, column, DATA_START_ROW);
            DensitySample::new(density_kg_m3, millimeters_to_meters(&heights_mm))
        })
        .collect();

    for sample in &samples {
        if sample.heights_m.len() != time_s.len() {
            warn!(
                sample = %sample.label,
                heights = sample.heights_m.len(),
                times = time_s.len(),
                "height and time columns have different lengths after cleaning"
            );
        }
    }

    SedimentationData { time_s, samples }
}


// src/data_input/data_clean.rs
