// src/data_analysis/experiments.rs

use tracing::{debug, error};

use crate::data_analysis::regression::{linear_regression, RegressionResult};
use crate::data_input::sample_data::SedimentationData;
use crate::error::Result;

/// One density sample together with its linear fit
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    pub label: String,
    pub density_kg_m3: f64,
    pub heights_m: Vec<f64>,
    pub fit: RegressionResult,
}

impl ExperimentResult {
    pub fn velocity(&self) -> f64 {
        self.fit.velocity
    }
}

/// Fits every sample against the shared time axis, in sheet order.
///
/// The first sample whose heights cannot be fitted aborts the whole run.
pub fn fit_experiments(data: &SedimentationData) -> Result<Vec<ExperimentResult>> {
    let mut results = Vec::with_capacity(data.samples.len());
    for sample in &data.samples {
        let fit = linear_regression(&data.time_s, &sample.heights_m).map_err(|e| {
            error!(sample = %sample.label, "linear fit failed: {e}");
            e
        })?;
        debug!(
            sample = %sample.label,
            slope = fit.slope,
            intercept = fit.intercept,
            r_squared = fit.r_squared,
            "fitted sample"
        );
        results.push(ExperimentResult {
            label: sample.label.clone(),
            density_kg_m3: sample.density_kg_m3,
            heights_m: sample.heights_m.clone(),
            fit,
        });
    }
    Ok(results)
}

/// Sorts results by settling velocity, fastest first. Ties keep sheet order.
/// NaN velocities (from infinite cells) rank last, after `-inf`.
pub fn rank_by_velocity(mut results: Vec<ExperimentResult>) -> Vec<ExperimentResult> {
    results.sort_by(|a, b| {
        let (va, vb) = (a.velocity(), b.velocity());
        va.is_nan()
            .cmp(&vb.is_nan())
            .then_with(|| vb.total_cmp(&va))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::sample_data::DensitySample;
    use crate::error::SedimentError;

    fn result_with_velocity(label: &str, velocity: f64) -> ExperimentResult {
        ExperimentResult {
            label: label.to_string(),
            density_kg_m3: 1100.0,
            heights_m: vec![],
            fit: RegressionResult {
                slope: -velocity,
                intercept: 0.3,
                velocity,
                fitted_time: vec![],
                fitted_height: vec![],
                r_squared: 1.0,
            },
        }
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank_by_velocity(vec![
            result_with_velocity("a", 1e-5),
            result_with_velocity("b", 3e-5),
            result_with_velocity("c", 2e-5),
        ]);
        let velocities: Vec<f64> = ranked.iter().map(|r| r.velocity()).collect();
        assert_eq!(velocities, vec![3e-5, 2e-5, 1e-5]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_ties_keep_order() {
        let ranked = rank_by_velocity(vec![
            result_with_velocity("first", 2e-5),
            result_with_velocity("second", 2e-5),
            result_with_velocity("slow", -1e-6),
        ]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "slow"]);
    }

    #[test]
    fn test_rank_nan_velocity_last() {
        let ranked = rank_by_velocity(vec![
            result_with_velocity("nan", f64::NAN),
            result_with_velocity("slow", 1e-5),
            result_with_velocity("neg_nan", -f64::NAN),
            result_with_velocity("fast", f64::INFINITY),
            result_with_velocity("rising", f64::NEG_INFINITY),
        ]);
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["fast", "slow", "rising", "nan", "neg_nan"]);
    }

    #[test]
    fn test_fit_experiments_in_sheet_order() {
        let time_s = vec![0.0, 60.0, 120.0, 180.0];
        let data = SedimentationData {
            time_s: time_s.clone(),
            samples: vec![
                DensitySample::new(1157.0, time_s.iter().map(|t| 0.3 - 1e-5 * t).collect()),
                DensitySample::new(1072.0, time_s.iter().map(|t| 0.3 - 4e-5 * t).collect()),
            ],
        };

        let results = fit_experiments(&data).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, "1157");
        assert_eq!(results[1].label, "1072");
        assert!((results[0].velocity() - 1e-5).abs() < 1e-12);
        assert!((results[1].velocity() - 4e-5).abs() < 1e-12);
    }

    #[test]
    fn test_fit_experiments_aborts_on_mismatch() {
        let data = SedimentationData {
            time_s: vec![0.0, 60.0, 120.0],
            samples: vec![DensitySample::new(1157.0, vec![0.3, 0.29])],
        };
        assert!(matches!(
            fit_experiments(&data),
            Err(SedimentError::LengthMismatch { .. })
        ));
    }
}

// src/data_analysis/experiments.rs
