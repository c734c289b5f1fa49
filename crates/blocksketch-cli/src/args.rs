//! Command-line argument definitions for the Blocksketch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input discovery, configuration file
//! selection, number formatting, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Blocksketch converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files or directories to convert; directories are searched
    /// recursively for *.bsb files
    #[arg(default_value = ".")]
    pub paths: Vec<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number format for emitted coordinates (`g` or `.<n>f`), overriding
    /// the configuration file
    #[arg(long)]
    pub number_format: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
