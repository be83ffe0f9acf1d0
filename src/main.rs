//! `inpaint-cli` entrypoint.
//!
//! Parses arguments, runs a single job, and exits with `0` on success or `1`
//! on any failure, argument errors included.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use inpaint_cli::{DEFAULT_QUALITY, DEFAULT_RADIUS, InpaintRequest, MaskFit, Telea, inpaint_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "inpaint-cli",
    version,
    about = "Fill masked regions of an image using Telea inpainting",
    after_help = "Example: inpaint-cli input.jpg mask.png output.jpg 3"
)]
struct Cli {
    /// Image to inpaint
    image_path: PathBuf,

    /// Mask marking the pixels to reconstruct (values above 127)
    mask_path: PathBuf,

    /// Where to write the result, the extension selects the format
    output_path: PathBuf,

    /// Neighborhood radius used while filling a pixel, 3-5 recommended
    #[arg(default_value_t = DEFAULT_RADIUS, value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64))]
    radius: u32,

    /// Quality for lossy output formats
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Fail when the mask resolution differs from the image instead of resampling it
    #[arg(long, default_value_t = false)]
    strict_mask: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// First line of a clap error, without clap's own `error:` prefix.
fn parse_error_line(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                println!("Error: {}", parse_error_line(&error));
                return ExitCode::FAILURE;
            }
        },
    };
    init_tracing(args.verbose);

    let mask_fit = if args.strict_mask {
        MaskFit::Strict
    } else {
        MaskFit::Resample
    };
    let request = InpaintRequest::new(args.image_path, args.mask_path, args.output_path)
        .with_radius(args.radius)
        .with_quality(args.quality)
        .with_mask_fit(mask_fit);

    match inpaint_file(&request, &Telea) {
        Ok(summary) => {
            tracing::debug!(?summary, "finished");
            println!(
                "Inpainting completed successfully. Output saved to {}",
                request.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
