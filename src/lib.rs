//! TightyTile: concatenate images at their smallest common size.
//!
//! TightyTile lays a sequence of images out in a single row or column. Every
//! image is first scaled (keeping its own aspect ratio) so the cross axis
//! matches the smallest image, then the images are pasted one after another
//! onto a black RGB canvas, which is encoded according to the output file's
//! extension.
//!
//! # Modules
//!
//! - [`tile`]: The resizer ([`tile::fit_resize`]) and compositor ([`tile::concatenate`])
//! - [`raster`]: The [`Raster`] capability trait and image loading
//! - [`encode`]: Extension-driven encoding profiles and saving
//! - [`orient`]: The [`Orientation`] tag and its accepted spellings
//! - [`output`]: Default output naming and path resolution
//! - [`error`]: Error types for tighty-tile operations

pub mod encode;
pub mod error;
pub mod orient;
pub mod output;
pub mod raster;
pub mod tile;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

pub use encode::{save_image, EncodingProfile, SaveOutcome};
pub use error::TightyTileError;
pub use orient::Orientation;
pub use raster::{Canvas, Raster};

/// The tighty-tile CLI application.
#[derive(Parser)]
#[command(name = "tighty-tile")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase logging verbosity (-vv for debug output).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    // `concat` is the default: its arguments are accepted without the subcommand.
    #[command(flatten)]
    concat: ConcatArgs,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Concatenate multiple images into a single image.
    Concat(ConcatArgs),
}

/// Arguments for the concat subcommand.
#[derive(clap::Args, Debug)]
struct ConcatArgs {
    /// Images to concatenate, in order (at least two).
    images: Vec<PathBuf>,

    /// Direction to concatenate images ('h', 'horizontal', 'v', or 'vertical').
    #[arg(short, long, default_value = "horizontal")]
    direction: Orientation,

    /// Output file path; the extension selects the format.
    /// Defaults to TightyTile_<timestamp>.webp in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Run the tighty-tile CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), TightyTileError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("[Arguments] verbose={} quiet={}", cli.verbose, cli.quiet);
    if cli.verbose >= 5 {
        log::debug!("Logging now has Super Cow Powers!");
    }

    match cli.command {
        Some(Commands::Concat(args)) => run_concat(args),
        None => run_concat(cli.concat),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0 | 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Execute the concat subcommand.
fn run_concat(args: ConcatArgs) -> Result<(), TightyTileError> {
    log::debug!("[Arguments] image_paths={:?}", args.images);
    log::debug!("[Arguments] direction={}", args.direction);
    log::debug!("[Arguments] output={:?}", args.output);

    validate_inputs(&args.images)?;

    let cwd = std::env::current_dir()?;
    let output = output::resolve_output(args.output.as_deref(), &cwd)?;
    log::debug!("[Processed] orient={:?}", args.direction);
    log::info!("Output will be saved to: \"{}\"", output.display());

    concat_files(&args.images, args.direction, &output)?;
    Ok(())
}

/// Reject invocations the pipeline cannot run: fewer than two inputs, or an
/// input that is not an existing regular file.
fn validate_inputs(images: &[PathBuf]) -> Result<(), TightyTileError> {
    if images.len() < 2 {
        let message = "At least two images are required for concatenation.";
        log::error!("{}", message);
        return Err(TightyTileError::Usage(message.to_string()));
    }

    for path in images {
        let message = if !path.exists() {
            format!("Path \"{}\" does not exist.", path.display())
        } else if !path.is_file() {
            format!("Path \"{}\" is not a file.", path.display())
        } else {
            continue;
        };
        log::error!("{}", message);
        return Err(TightyTileError::Usage(message));
    }
    Ok(())
}

/// Load `inputs`, tile them along `orient`, and save the result to `output`.
///
/// This is the whole pipeline behind the CLI: decode, [`tile::fit_resize`],
/// [`tile::concatenate`], then [`save_image`].
pub fn concat_files(
    inputs: &[PathBuf],
    orient: Orientation,
    output: &Path,
) -> Result<SaveOutcome, TightyTileError> {
    let images = inputs
        .iter()
        .map(|path| raster::load_image(path))
        .collect::<Result<Vec<_>, _>>()?;

    let resized = tile::fit_resize(images, orient)?;
    let canvas = tile::concatenate(&resized, orient)?;
    drop(resized);

    save_image(&canvas, output)
}
