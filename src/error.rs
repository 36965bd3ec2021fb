// src/error.rs

use thiserror::Error;

/// Errors raised while loading sedimentation data or fitting it.
#[derive(Error, Debug)]
pub enum SedimentError {
    /// Spreadsheet could not be opened or read
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet is not valid CSV
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be opened or its sheet could not be read
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    #[error("Length mismatch: {time_len} time values vs {height_len} height values")]
    LengthMismatch { time_len: usize, height_len: usize },

    #[error("Not enough data points for regression: {found} (need at least {required})")]
    InsufficientData { found: usize, required: usize },

    #[error("Cannot fit a line when all time values are identical")]
    DegenerateTime,
}

pub type Result<T> = std::result::Result<T, SedimentError>;

// src/error.rs
