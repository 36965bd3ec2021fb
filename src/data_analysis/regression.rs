// src/data_analysis/regression.rs

use ndarray::Array1;

use crate::constants::MIN_REGRESSION_POINTS;
use crate::error::{Result, SedimentError};

/// Ordinary least-squares fit of height against time for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,     // m/s
    pub intercept: f64, // m
    /// Settling velocity (m/s), the negated slope since the interface falls over time.
    pub velocity: f64,
    pub fitted_time: Vec<f64>,
    /// Same length as `fitted_time`.
    pub fitted_height: Vec<f64>,
    pub r_squared: f64,
}

/// Fits `height = intercept + slope * time` by ordinary least squares.
///
/// Fails on mismatched lengths, fewer than two points, or a time axis with no
/// spread. A series with constant height fits a flat line with R² = 0.
pub fn linear_regression(time_s: &[f64], height_m: &[f64]) -> Result<RegressionResult> {
    if time_s.len() != height_m.len() {
        return Err(SedimentError::LengthMismatch {
            time_len: time_s.len(),
            height_len: height_m.len(),
        });
    }
    if time_s.len() < MIN_REGRESSION_POINTS {
        return Err(SedimentError::InsufficientData {
            found: time_s.len(),
            required: MIN_REGRESSION_POINTS,
        });
    }
    if time_s.iter().all(|&t| t == time_s[0]) {
        return Err(SedimentError::DegenerateTime);
    }

    let x = Array1::from(time_s.to_vec());
    let y = Array1::from(height_m.to_vec());
    let n = x.len() as f64;
    let x_mean = x.sum() / n;
    let y_mean = y.sum() / n;

    let dx = &x - x_mean;
    let dy = &y - y_mean;
    let ss_xx = dx.dot(&dx);
    let ss_xy = dx.dot(&dy);
    let ss_yy = dy.dot(&dy);

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;

    // The mean of a constant series can round off the constant, leaving ss_yy
    // a few ulps above zero, so flatness is checked on the raw heights.
    let flat_heights = height_m.iter().all(|&h| h == height_m[0]);
    let r = if flat_heights || ss_yy == 0.0 {
        0.0
    } else {
        (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0)
    };

    let fitted_height = x.mapv(|t| intercept + slope * t);

    Ok(RegressionResult {
        slope,
        intercept,
        velocity: -slope,
        fitted_time: x.to_vec(),
        fitted_height: fitted_height.to_vec(),
        r_squared: r * r,
    })
}


// src/data_analysis/regression.rs
