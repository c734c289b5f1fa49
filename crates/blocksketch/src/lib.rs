//! Blocksketch - ASCII block-diagram sketches to TikZ boilerplate.
//!
//! A sketch document places control-engineering blocks on a literal
//! character grid, connects them with scalar (`-`) or vector (`=`) signal
//! lines, and optionally renames the sketch tokens to human-readable
//! labels. Blocksketch parses such documents, inserts explicit branch
//! joints wherever a block feeds more than one signal, and serializes the
//! result as deterministic TikZ boilerplate.

pub mod config;
pub mod export;

mod error;

pub use blocksketch_core::{block, diagram, error::DiagramError, geometry};
pub use blocksketch_parser::{BuildError, SectionKind, Sections, SketchScales, build_diagram};

pub use error::BlocksketchError;

use log::{debug, info, trace};

use blocksketch_core::diagram::Diagram;

use config::AppConfig;
use export::TikzExporter;

/// Converter for parsing sketch documents and rendering TikZ.
///
/// # Examples
///
/// ```rust
/// use blocksketch::{SketchConverter, config::AppConfig};
///
/// let source = "sketch:\n  P1  C1\nconnections:\nP1 - C1\n";
///
/// let converter = SketchConverter::new(AppConfig::default());
///
/// // Parse source to a diagram with branch joints inserted
/// let diagram = converter.parse(source).expect("Failed to parse");
///
/// // Render the diagram to TikZ
/// let tikz = converter.render_tikz(&diagram).expect("Failed to render");
/// assert!(tikz.contains("\\begin{tikzpicture}"));
/// ```
#[derive(Debug, Default)]
pub struct SketchConverter {
    config: AppConfig,
}

impl SketchConverter {
    /// Creates a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parses a sketch document into a diagram.
    ///
    /// This classifies the document into sections, imports blocks,
    /// connections, and names, and inserts branch joints so that every
    /// non-joint block keeps at most one unit of outgoing signal.
    ///
    /// # Errors
    ///
    /// Returns `BlocksketchError` for a missing sketch section, duplicate
    /// block names, unknown references, and duplicate connections. The
    /// diagram is all-or-nothing: no partial diagram is returned.
    pub fn parse(&self, source: &str) -> Result<Diagram, BlocksketchError> {
        info!("Parsing sketch document");

        let scales = self.config.sketch().scales();
        let mut diagram =
            blocksketch_parser::parse(source, &scales).map_err(BlocksketchError::Build)?;
        debug!(num_blocks = diagram.num_blocks(); "Document parsed");

        diagram
            .insert_joints()
            .map_err(|err| BlocksketchError::Build(err.into()))?;
        debug!(num_blocks = diagram.num_blocks(); "Branch joints inserted");
        trace!(diagram:?; "Final diagram");

        Ok(diagram)
    }

    /// Renders a diagram to TikZ boilerplate text.
    ///
    /// # Errors
    ///
    /// Returns `BlocksketchError::Config` if the configured number format
    /// is invalid.
    pub fn render_tikz(&self, diagram: &Diagram) -> Result<String, BlocksketchError> {
        let number_format = self
            .config
            .output()
            .number_format()
            .map_err(BlocksketchError::Config)?;

        let exporter = TikzExporter::new(self.config.style(), number_format);
        let tikz = exporter.export(diagram);
        info!("TikZ rendered successfully");
        Ok(tikz)
    }

    /// Parses a document and renders it in one step.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`parse`](Self::parse) and
    /// [`render_tikz`](Self::render_tikz).
    pub fn convert(&self, source: &str) -> Result<String, BlocksketchError> {
        let diagram = self.parse(source)?;
        self.render_tikz(&diagram)
    }
}
