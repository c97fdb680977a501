use tracing::info;
use tracing_subscriber::EnvFilter;

use framefit::NormalizeParams;
use framefit::api::{normalize_file_to_path, process_directory_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Honor RUST_LOG when set; `--log` alone defaults to debug.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
}

fn resolve_params(args: &CliArgs) -> Result<NormalizeParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => NormalizeParams::from_json_file(path)?,
        None => NormalizeParams::default(),
    };

    if let Some(width) = args.width {
        params.canvas_width = width;
    }
    if let Some(height) = args.height {
        params.canvas_height = height;
    }
    if let Some(sigma) = args.blur_sigma {
        params.blur_sigma = sigma;
    }
    if let Some(quality) = args.quality {
        params.jpeg_quality = quality;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }

    params.validate().map_err(AppError::Framefit)?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt().with_env_filter(log_filter()).init();
    }

    let params = resolve_params(&args)?;
    let batch_mode = args.input_dir.is_some() || args.output_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);
        info!(
            "Canvas: {}x{}, blur sigma: {}, quality: {}, filter: {}",
            params.canvas_width,
            params.canvas_height,
            params.blur_sigma,
            params.jpeg_quality,
            params.filter
        );

        let report = process_directory_to_path(&input_dir, &output_dir, &params, args.overwrite)
            .map_err(AppError::Framefit)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Failed: {}", report.failed);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        normalize_file_to_path(&input, &output, &params).map_err(AppError::Framefit)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}
