//! Error types for Blocksketch operations.

use std::io;

use thiserror::Error;

use blocksketch_parser::BuildError;

/// The main error type for Blocksketch operations.
#[derive(Debug, Error)]
pub enum BlocksketchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("configuration error: {0}")]
    Config(String),
}
