// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sediment_settling::crate_version;
use sediment_settling::data_input::table::source_for_path;
use sediment_settling::pipeline::run_analysis;
use sediment_settling::plot_framework::{ChartRenderer, PngRenderer};

/// Theoretical and experimental sediment settling velocities
#[derive(Parser, Debug)]
#[command(name = "sediment_settling")]
#[command(version = crate_version())]
struct Args {
    /// Sedimentation spreadsheet: .xlsx/.xlsm/.xls/.ods workbook, or a CSV export
    #[arg(env = "SEDIMENT_DATA_FILE", default_value = "Data_tut_3.xlsx")]
    input: PathBuf,

    /// Directory the PNG charts are written to
    #[arg(short, long, env = "SEDIMENT_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Print the results without rendering charts
    #[arg(long)]
    no_plots: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sediment_settling=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    info!(
        version = crate_version(),
        input = %args.input.display(),
        "starting sediment settling analysis"
    );

    let root_name = args
        .input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let source = source_for_path(&args.input);

    let mut png_renderer = PngRenderer::new(&args.output_dir, root_name);
    let renderer: Option<&mut dyn ChartRenderer> = if args.no_plots {
        None
    } else {
        Some(&mut png_renderer)
    };

    run_analysis(source.as_ref(), renderer)?;
    Ok(())
}

// src/main.rs
