// src/report.rs
//
// Console output: theoretical velocities and the ranked experiment table.

use crate::constants::{
    SEA_WATER_DENSITY_KG_M3, TABLE_LABEL_WIDTH, TABLE_RULE_WIDTH, TABLE_R_SQUARED_WIDTH,
    TABLE_VELOCITY_WIDTH,
};
use crate::data_analysis::experiments::ExperimentResult;
use crate::data_analysis::stokes::SettlingParticle;

/// Scientific notation with a signed, at least two-digit exponent: `1.23457e-05`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        // NaN and infinities carry no exponent
        None => formatted,
    }
}

pub fn format_theoretical_velocities(particles: &[SettlingParticle]) -> String {
    let mut out = String::new();
    for particle in particles {
        let velocity = particle.theoretical_velocity(SEA_WATER_DENSITY_KG_M3);
        out.push_str(&format!(
            "Theoretical Stokes Velocity ({}): {} m/s\n",
            particle.name,
            format_scientific(velocity, 2)
        ));
    }
    out
}

/// Fixed-width table of density label, settling velocity and R², in the given order.
pub fn format_results_table(results: &[ExperimentResult]) -> String {
    let mut out = format!(
        "{:<lw$} | {:<vw$} | {:<rw$}\n",
        "Density",
        "vs (m/s)",
        "R^2",
        lw = TABLE_LABEL_WIDTH,
        vw = TABLE_VELOCITY_WIDTH,
        rw = TABLE_R_SQUARED_WIDTH,
    );
    out.push_str(&"-".repeat(TABLE_RULE_WIDTH));
    out.push('\n');
    for result in results {
        out.push_str(&format!(
            "{:<lw$} | {:<vw$} | {:<rw$.4}\n",
            result.label,
            format_scientific(result.velocity(), 5),
            result.fit.r_squared,
            lw = TABLE_LABEL_WIDTH,
            vw = TABLE_VELOCITY_WIDTH,
            rw = TABLE_R_SQUARED_WIDTH,
        ));
    }
    out
}


// src/report.rs
