//! Parsers that turn sketch documents into Blocksketch diagrams.
//!
//! The input format is a plain-text document with up to three tagged
//! sections: an ASCII-art sketch placing blocks on a character grid, a list
//! of connections between them, and a list of human-readable names
//! replacing the sketch tokens. [`parse`] classifies a raw document and
//! builds the diagram; [`build_diagram`] accepts pre-classified
//! [`Sections`] from structured front ends.

pub mod error;

mod grammar;
mod import;
mod reader;

pub use error::BuildError;
pub use reader::{SectionKind, Sections};

use log::debug;

use blocksketch_core::diagram::Diagram;

/// Scale factors mapping sketch grid positions to diagram space.
///
/// A sketch character cell is much taller than it is wide, so the y-scale
/// should be two to three times the x-scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchScales {
    /// Diagram-space width of one sketch column, in cm.
    pub x_scale: f64,
    /// Diagram-space height of one sketch row, in cm.
    pub y_scale: f64,
}

impl Default for SketchScales {
    fn default() -> Self {
        Self {
            x_scale: 0.5,
            y_scale: 1.5,
        }
    }
}

/// Classifies a raw document and builds its diagram.
///
/// # Errors
///
/// [`BuildError::MissingSketch`] if the document has no sketch section;
/// any grammar or graph failure aborts the whole diagram.
pub fn parse(source: &str, scales: &SketchScales) -> Result<Diagram, BuildError> {
    build_diagram(&Sections::from_lines(source.lines()), scales)
}

/// Builds a diagram from classified sections: placement first, then
/// connections, then renames.
///
/// Construction is all-or-nothing; on error no partially built diagram is
/// returned.
///
/// # Errors
///
/// [`BuildError::MissingSketch`] if the sketch buffer is absent entirely
/// (an all-blank sketch buffer is fine and yields an empty diagram);
/// [`BuildError::Diagram`] for duplicate names, unknown references, and
/// duplicate edges.
pub fn build_diagram(sections: &Sections, scales: &SketchScales) -> Result<Diagram, BuildError> {
    if sections.sketch().is_empty() {
        return Err(BuildError::MissingSketch);
    }

    let mut diagram = Diagram::new();
    import::sketch(&mut diagram, sections.sketch(), scales)?;
    import::connections(&mut diagram, sections.connections())?;
    import::names(&mut diagram, sections.names())?;

    debug!(
        num_blocks = diagram.num_blocks(),
        num_edges = diagram.num_edges();
        "diagram built"
    );
    Ok(diagram)
}
