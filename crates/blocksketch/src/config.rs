//! Configuration types for Blocksketch conversion.
//!
//! This module provides configuration structures that control how sketches
//! are scaled and how the emitted TikZ is styled. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining sketch, style, and
//!   output settings.
//! - [`SketchConfig`] - Grid-to-diagram scale factors for sketch import.
//! - [`StyleConfig`] - TikZ styles for connection lines and arrow tips.
//! - [`OutputConfig`] - Number formatting for emitted coordinates.

use serde::Deserialize;

use blocksketch_parser::SketchScales;

use crate::export::NumberFormat;

/// Top-level configuration combining sketch, style, and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Sketch import section.
    #[serde(default)]
    sketch: SketchConfig,

    /// Connection style section.
    #[serde(default)]
    style: StyleConfig,

    /// Output formatting section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(sketch: SketchConfig, style: StyleConfig, output: OutputConfig) -> Self {
        Self {
            sketch,
            style,
            output,
        }
    }

    /// Returns the sketch import configuration.
    pub fn sketch(&self) -> &SketchConfig {
        &self.sketch
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Grid-to-diagram scale factors for sketch import.
#[derive(Debug, Clone, Deserialize)]
pub struct SketchConfig {
    /// Diagram-space width of one sketch column, in cm.
    #[serde(default = "SketchConfig::default_x_scale")]
    x_scale: f64,

    /// Diagram-space height of one sketch row, in cm. Sketch character
    /// cells are tall, so this should be two to three times the x-scale.
    #[serde(default = "SketchConfig::default_y_scale")]
    y_scale: f64,
}

impl SketchConfig {
    /// Creates a new [`SketchConfig`] with the specified scale factors.
    pub fn new(x_scale: f64, y_scale: f64) -> Self {
        Self { x_scale, y_scale }
    }

    fn default_x_scale() -> f64 {
        0.5
    }

    fn default_y_scale() -> f64 {
        1.5
    }

    /// Returns the scale factors as parser input.
    pub fn scales(&self) -> SketchScales {
        SketchScales {
            x_scale: self.x_scale,
            y_scale: self.y_scale,
        }
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            x_scale: Self::default_x_scale(),
            y_scale: Self::default_y_scale(),
        }
    }
}

/// TikZ styles applied to emitted connection lines.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Line style of scalar-valued connections.
    #[serde(default = "StyleConfig::default_scalar")]
    scalar: String,

    /// Line style of vector-valued connections.
    #[serde(default = "StyleConfig::default_vector")]
    vector: String,

    /// Arrow-tip style appended to connections that do not end in a branch
    /// joint.
    #[serde(default = "StyleConfig::default_arrow")]
    arrow: String,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified styles.
    pub fn new(
        scalar: impl Into<String>,
        vector: impl Into<String>,
        arrow: impl Into<String>,
    ) -> Self {
        Self {
            scalar: scalar.into(),
            vector: vector.into(),
            arrow: arrow.into(),
        }
    }

    fn default_scalar() -> String {
        "thick".to_owned()
    }

    fn default_vector() -> String {
        "very thick".to_owned()
    }

    fn default_arrow() -> String {
        "-latex".to_owned()
    }

    /// Line style of scalar-valued connections.
    pub fn scalar(&self) -> &str {
        &self.scalar
    }

    /// Line style of vector-valued connections.
    pub fn vector(&self) -> &str {
        &self.vector
    }

    /// Arrow-tip style.
    pub fn arrow(&self) -> &str {
        &self.arrow
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scalar: Self::default_scalar(),
            vector: Self::default_vector(),
            arrow: Self::default_arrow(),
        }
    }
}

/// Number formatting for emitted coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Number format specification: `g` for the shortest representation or
    /// `.<n>f` for fixed precision.
    #[serde(default = "OutputConfig::default_number_format")]
    number_format: String,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the specified number format
    /// specification.
    pub fn new(number_format: impl Into<String>) -> Self {
        Self {
            number_format: number_format.into(),
        }
    }

    fn default_number_format() -> String {
        "g".to_owned()
    }

    /// Returns the parsed [`NumberFormat`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured specification is not a valid
    /// number format.
    pub fn number_format(&self) -> Result<NumberFormat, String> {
        self.number_format.parse()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            number_format: Self::default_number_format(),
        }
    }
}
