// src/data_input/mod.rs

pub mod data_clean;
pub mod sample_data;
pub mod table;

// src/data_input/mod.rs
