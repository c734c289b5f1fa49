//! Error type for diagram construction from text.

use thiserror::Error;

use blocksketch_core::error::DiagramError;

/// Errors raised while building a diagram from classified input sections.
///
/// Construction is all-or-nothing: any failure aborts the whole diagram and
/// no partially built diagram is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The input contains no sketch section; a diagram cannot be built
    /// without one.
    #[error("the input must contain a sketch section")]
    MissingSketch,

    /// A grammar matched, but applying it to the diagram failed.
    #[error(transparent)]
    Diagram(#[from] DiagramError),
}
