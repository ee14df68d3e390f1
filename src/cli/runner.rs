use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use photosquare::api::output_path_for;
use photosquare::types::parse_rgb_color;
use photosquare::{
    BatchReport, OverlaySpec, ProcessingOutcome, ProcessingParams, process_directory_with,
    process_image_to_path, write_batch_report,
};

use super::args::CliArgs;
use super::errors::AppError;

fn load_params(path: &Path) -> Result<ProcessingParams, AppError> {
    let invalid = |reason: String| AppError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };
    let file = File::open(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| invalid(e.to_string()))
}

/// Config file (or defaults) overlaid with any explicitly passed flags.
pub fn build_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    let mut params = match &args.config {
        Some(path) => load_params(path)?,
        None => ProcessingParams::default(),
    };

    if let Some(crop) = args.crop {
        params.crop = crop;
    }
    if let Some(size) = args.size {
        params.size = size;
    }
    let color = match &args.overlay_color {
        Some(value) => parse_rgb_color(value)?,
        None => params.overlay.color,
    };
    let opacity = args.overlay_opacity.unwrap_or(params.overlay.opacity);
    params.overlay = OverlaySpec::new(color, opacity)?;
    if let Some(intensity) = args.vignette {
        params.vignette_intensity = intensity;
    }
    if let Some(normalization) = args.vignette_normalization {
        params.vignette_normalization = normalization;
    }
    if let Some(quality) = args.quality {
        params.quality = quality;
    }

    params.validate()?;
    Ok(params)
}

fn print_outcome(index: usize, total: usize, outcome: &ProcessingOutcome) {
    match outcome {
        ProcessingOutcome::Success { input, output } => {
            println!("[{}/{}] {} -> {}", index, total, input.display(), output.display());
        }
        ProcessingOutcome::Failure {
            input,
            kind,
            reason,
        } => {
            eprintln!(
                "[{}/{}] {} failed ({}): {}",
                index,
                total,
                input.display(),
                kind,
                reason
            );
        }
    }
}

fn print_summary(report: &BatchReport, output_dir: &Path) {
    println!();
    println!("Processed: {}", report.processed);
    println!("Failed:    {}", report.errors);
    println!("Skipped:   {}", report.skipped);
    if report.produced_output() {
        println!("Output:    {}", output_dir.display());
    } else {
        println!("No output produced.");
    }
}

fn run_batch(
    input_dir: PathBuf,
    output_dir: PathBuf,
    report_path: Option<PathBuf>,
    params: &ProcessingParams,
) -> Result<(), AppError> {
    info!("Starting batch processing from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let report = process_directory_with(&input_dir, &output_dir, params, print_outcome)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    print_summary(&report, &output_dir);

    if let Some(path) = report_path {
        write_batch_report(&path, &report)?;
    }
    Ok(())
}

fn run_single(input: PathBuf, output: PathBuf, params: &ProcessingParams) -> Result<(), AppError> {
    let output = if output.is_dir() {
        output_path_for(&input, &output)?
    } else {
        output
    };
    process_image_to_path(&input, &output, params)?;
    info!("Successfully processed: {:?} -> {:?}", input, output);
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let params = build_params(&args)?;
    info!("Processing parameters: {:?}", params);

    match (args.input_dir, args.input) {
        (Some(_), Some(_)) => Err(AppError::ConflictingArguments {
            first: "--input-dir",
            second: "--input",
        }),
        (Some(input_dir), None) => {
            let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
                arg: "--output-dir".to_string(),
            })?;
            run_batch(input_dir, output_dir, args.report, &params)
        }
        (None, Some(input)) => {
            let output = args.output.ok_or(AppError::MissingArgument {
                arg: "--output".to_string(),
            })?;
            run_single(input, output, &params)
        }
        (None, None) => Err(AppError::MissingArgument {
            arg: "--input or --input-dir".to_string(),
        }),
    }
}
