// src/pipeline.rs

use std::error::Error;

use tracing::info;

use crate::data_analysis::experiments::{fit_experiments, rank_by_velocity, ExperimentResult};
use crate::data_analysis::stokes::THEORETICAL_PRESETS;
use crate::data_input::data_clean::data_clean;
use crate::data_input::table::TableSource;
use crate::plot_framework::ChartRenderer;
use crate::plot_functions::plot_linear_fits::plot_linear_fits;
use crate::plot_functions::plot_raw_data::plot_raw_data;
use crate::report::{format_results_table, format_theoretical_velocities};

/// Runs the whole analysis: theoretical velocities, load and clean, raw plot,
/// fits, ranked table, fit plot. Charts are skipped when `renderer` is `None`.
///
/// Returns the experiment results ranked fastest first.
pub fn run_analysis(
    source: &dyn TableSource,
    mut renderer: Option<&mut dyn ChartRenderer>,
) -> Result<Vec<ExperimentResult>, Box<dyn Error>> {
    println!("--- Theoretical Settling Velocities ---");
    print!("{}", format_theoretical_velocities(&THEORETICAL_PRESETS));

    println!("\n--- Loading Sedimentation Data ---");
    let table = source.load_table()?;
    let data = data_clean(&table);
    println!(
        "Read {} time points for {} samples.",
        data.time_s.len(),
        data.samples.len()
    );
    data.check_alignment()?;

    if let Some(r) = renderer.as_deref_mut() {
        println!("\n--- Generating Raw Data Plot ---");
        plot_raw_data(&data, r)?;
    }

    println!("\n--- Calculating Experimental Settling Velocities ---");
    let experiments = fit_experiments(&data)?;
    info!(samples = experiments.len(), "fitted all samples");
    let ranked = rank_by_velocity(experiments.clone());
    print!("{}", format_results_table(&ranked));

    if let Some(r) = renderer.as_deref_mut() {
        println!("\n--- Generating Linear Fit Plot ---");
        plot_linear_fits(&experiments, r)?;
    } else {
        println!("\nSkipping plots.");
    }

    Ok(ranked)
}

// src/pipeline.rs
