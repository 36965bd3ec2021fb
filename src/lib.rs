// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;

pub use error::{Result, SedimentError};

// Crate version; release builds may inject a git-derived version at compile time.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
