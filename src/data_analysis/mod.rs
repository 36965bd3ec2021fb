// src/data_analysis/mod.rs

pub mod experiments;
pub mod regression;
pub mod stokes;

// src/data_analysis/mod.rs
