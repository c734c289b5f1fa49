//! Error adapter for converting BlocksketchError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use blocksketch::{BlocksketchError, BuildError};

/// Adapter wrapping a [`BlocksketchError`] for miette rendering.
///
/// The library errors carry no source spans, so the adapter contributes a
/// stable diagnostic code per variant and, where useful, a help text.
pub struct ErrorAdapter<'a>(pub &'a BlocksketchError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BlocksketchError::Io(_) => "blocksketch::io",
            BlocksketchError::Build(_) => "blocksketch::build",
            BlocksketchError::Config(_) => "blocksketch::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            BlocksketchError::Build(BuildError::MissingSketch) => Some(Box::new(
                "start the block placement with a `sketch:` (or `skizze:`) tag line",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let err = BlocksketchError::Config("bad".to_owned());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "blocksketch::config");

        let err = BlocksketchError::Build(BuildError::MissingSketch);
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "blocksketch::build");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_display_passthrough() {
        let err = BlocksketchError::Build(BuildError::MissingSketch);
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "the input must contain a sketch section"
        );
    }
}
