// src/data_input/sample_data.rs

use crate::error::{Result, SedimentError};

/// Cleaned height series for one sample, in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySample {
    pub label: String,       // Density as shown in reports, e.g. "1157".
    pub density_kg_m3: f64,
    pub heights_m: Vec<f64>,
}

impl DensitySample {
    pub fn new(density_kg_m3: f64, heights_m: Vec<f64>) -> Self {
        Self {
            label: format!("{density_kg_m3:.0}"),
            density_kg_m3,
            heights_m,
        }
    }
}

/// Elapsed time in seconds shared by all samples, plus one height series per sample.
/// Alignment between `time_s` and each `heights_m` is only enforced by `check_alignment`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SedimentationData {
    pub time_s: Vec<f64>,
    pub samples: Vec<DensitySample>,
}

impl SedimentationData {
    /// Fails on the first sample whose height count differs from the time count.
    pub fn check_alignment(&self) -> Result<()> {
        match self
            .samples
            .iter()
            .find(|sample| sample.heights_m.len() != self.time_s.len())
        {
            Some(sample) => Err(SedimentError::LengthMismatch {
                time_len: self.time_s.len(),
                height_len: sample.heights_m.len(),
            }),
            None => Ok(()),
        }
    }
}


// src/data_input/sample_data.rs
