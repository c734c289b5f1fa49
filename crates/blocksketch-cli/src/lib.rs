//! CLI logic for the Blocksketch converter.
//!
//! The CLI is a batch driver around the [`blocksketch`] pipeline: it
//! discovers `*.bsb` sketch files, converts each into a sibling `*.tex`
//! file, and isolates per-diagram failures so one bad sketch does not stop
//! the batch.

pub mod error_adapter;

mod args;
mod config;
mod discover;

pub use args::Args;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{error, info};

use blocksketch::{
    BlocksketchError, SketchConverter,
    config::{AppConfig, OutputConfig},
    export::NumberFormat,
};

/// Outcome of one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sketches converted successfully.
    pub converted: usize,
    /// Sketches that failed and were skipped.
    pub failed: usize,
}

/// Run the Blocksketch CLI application
///
/// Each input path is either a `*.bsb` file or a directory searched
/// recursively for such files. Every sketch converts into a `.tex` file
/// next to its input. A failing sketch is reported, tagged with its path,
/// and skipped; the batch continues.
///
/// # Errors
///
/// Returns `BlocksketchError` for:
/// - Configuration loading errors
/// - An input path that does not exist or is not a `*.bsb` file
///
/// Per-sketch conversion failures do not abort the run; they are counted
/// in the returned [`Summary`].
pub fn run(args: &Args) -> Result<Summary, BlocksketchError> {
    let app_config = load_effective_config(args)?;
    let converter = SketchConverter::new(app_config);

    let mut summary = Summary::default();
    for path in &args.paths {
        let path = Path::new(path);
        if path.is_dir() {
            for file in discover::bsb_files(path)? {
                convert_one(&converter, &file, &mut summary);
            }
        } else if path.is_file() {
            if !discover::has_bsb_extension(path) {
                return Err(invalid_input(format!(
                    "input file '{}' must have a 'bsb' extension",
                    path.display()
                )));
            }
            convert_one(&converter, path, &mut summary);
        } else {
            return Err(invalid_input(format!(
                "file or folder '{}' not found",
                path.display()
            )));
        }
    }

    Ok(summary)
}

/// Loads the configuration and applies command-line overrides.
fn load_effective_config(args: &Args) -> Result<AppConfig, BlocksketchError> {
    let loaded = config::load_config(args.config.as_ref())?;

    let Some(format) = &args.number_format else {
        return Ok(loaded);
    };
    // Reject a bad format up front instead of failing on every sketch.
    format
        .parse::<NumberFormat>()
        .map_err(BlocksketchError::Config)?;
    Ok(AppConfig::new(
        loaded.sketch().clone(),
        loaded.style().clone(),
        OutputConfig::new(format),
    ))
}

/// Converts a single sketch file, reporting failure instead of
/// propagating it.
fn convert_one(converter: &SketchConverter, path: &Path, summary: &mut Summary) {
    match convert_file(converter, path) {
        Ok(output) => {
            info!(
                input = path.display().to_string(),
                output = output.display().to_string();
                "Converted sketch"
            );
            summary.converted += 1;
        }
        Err(err) => {
            error!(path = path.display().to_string(); "Failed to convert sketch: {err}");
            summary.failed += 1;
        }
    }
}

fn convert_file(
    converter: &SketchConverter,
    path: &Path,
) -> Result<PathBuf, BlocksketchError> {
    let source = fs::read_to_string(path)?;
    let tikz = converter.convert(&source)?;
    let output = path.with_extension("tex");
    fs::write(&output, tikz)?;
    Ok(output)
}

fn invalid_input(message: String) -> BlocksketchError {
    BlocksketchError::Io(io::Error::new(io::ErrorKind::InvalidInput, message))
}
