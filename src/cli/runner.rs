use std::path::Path;

use tracing::info;

use logoprep::api::{
    convert_directory, crop_directory, render_svg_to_png, verify_directory_alpha,
};
use logoprep::core::params::ProcessingParams;
use logoprep::io::Thumbnailer;

use super::args::{CliArgs, Command};
use super::errors::{AppError, parse_size};

fn load_params(args: &CliArgs) -> Result<ProcessingParams, AppError> {
    match &args.params {
        Some(path) => Ok(ProcessingParams::from_json_file(path)?),
        None => Ok(ProcessingParams::default()),
    }
}

fn backup_target(no_backup: bool, backup_dir: &Path) -> Option<&Path> {
    if no_backup { None } else { Some(backup_dir) }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = load_params(&args)?;

    match args.command {
        Command::Convert {
            dir,
            backup_dir,
            no_backup,
        } => {
            info!("Converting images in {:?} to RGBA PNG", dir);
            let report = convert_directory(&dir, backup_target(no_backup, &backup_dir))?;
            info!("Conversion complete!");
            info!("Processed: {}", report.processed);
            info!("Skipped: {}", report.skipped);
            info!("Errors: {}", report.errors);
        }
        Command::Crop {
            dir,
            backup_dir,
            no_backup,
            threshold,
            padding,
        } => {
            let mut params = params;
            if let Some(threshold) = threshold {
                params.alpha_threshold = threshold;
            }
            if let Some(padding) = padding {
                params.padding_fraction = padding;
            }

            info!("Cropping PNG files in {:?} to content bounds", dir);
            let report = crop_directory(&dir, &params, backup_target(no_backup, &backup_dir))?;
            info!("Cropping complete!");
            info!("Cropped: {}", report.processed);
            info!("Skipped: {}", report.skipped);
            info!("Errors: {}", report.errors);
        }
        Command::Verify { dir, fix } => {
            info!("Verifying alpha channels in {:?}", dir);
            let report = verify_directory_alpha(&dir, fix)?;
            info!("Verification complete!");
            info!("RGBA: {}", report.processed);
            info!("Missing alpha: {}", report.skipped);
            info!("Errors: {}", report.errors);
        }
        Command::RenderSvg {
            input,
            output,
            size,
            tool,
        } => {
            let target = match size.or(params.size.map(|(w, h)| format!("{}x{}", w, h))) {
                Some(s) => Some(parse_size(&s)?),
                None => None,
            };

            let thumbnailer = Thumbnailer::new(tool);
            let (width, height) = render_svg_to_png(&input, &output, target, &thumbnailer)?;
            info!(
                "Successfully rendered: {:?} -> {:?} ({}x{})\n",
                input, output, width, height
            );
        }
    }

    Ok(())
}
