//! Block kinds and placed diagram nodes.
//!
//! A diagram node is either a drawable block (summation point, transfer
//! element, branch joint, ...) or a bare named coordinate. The set of kinds
//! is fixed; each kind carries static configuration: its sketch short
//! identifier, its default drawing size, and the number of free parameter
//! slots its TikZ macro expects.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Point;

/// The kind of a diagram node.
///
/// Twelve functional block kinds plus [`BlockKind::Coordinate`], which marks
/// a bare named position without a drawn shape. The functional kind names
/// double as the TikZ macro names emitted for block definitions, which is
/// why they keep their German control-engineering spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A bare named coordinate; drawn as nothing.
    Coordinate,
    /// Summation point.
    Summationsstelle,
    /// Signal branch joint; exempt from the single-outgoing-signal rule.
    Verzweigung,
    /// Proportional element.
    PGlied,
    /// Integrating element.
    IGlied,
    /// Differentiating element.
    DGlied,
    /// First-order lag element.
    PTEinsGlied,
    /// Second-order lag element.
    PTZweiGlied,
    /// Dead-time element.
    TZGlied,
    /// Generic transfer function.
    UeFunk,
    /// Multiplication point.
    MGlied,
    /// Static characteristic curve.
    KLGlied,
    /// Saturation element.
    Saettigung,
}

impl BlockKind {
    /// All kinds, in the canonical table order.
    pub const ALL: [BlockKind; 13] = [
        BlockKind::Coordinate,
        BlockKind::Summationsstelle,
        BlockKind::Verzweigung,
        BlockKind::PGlied,
        BlockKind::IGlied,
        BlockKind::DGlied,
        BlockKind::PTEinsGlied,
        BlockKind::PTZweiGlied,
        BlockKind::TZGlied,
        BlockKind::UeFunk,
        BlockKind::MGlied,
        BlockKind::KLGlied,
        BlockKind::Saettigung,
    ];

    /// The kind's name, identical to the TikZ macro emitted for it.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Coordinate => "coordinate",
            BlockKind::Summationsstelle => "Summationsstelle",
            BlockKind::Verzweigung => "Verzweigung",
            BlockKind::PGlied => "PGlied",
            BlockKind::IGlied => "IGlied",
            BlockKind::DGlied => "DGlied",
            BlockKind::PTEinsGlied => "PTEinsGlied",
            BlockKind::PTZweiGlied => "PTZweiGlied",
            BlockKind::TZGlied => "TZGlied",
            BlockKind::UeFunk => "UeFunk",
            BlockKind::MGlied => "MGlied",
            BlockKind::KLGlied => "KLGlied",
            BlockKind::Saettigung => "Saettigung",
        }
    }

    /// The compact identifier used to place and reference this kind in an
    /// ASCII sketch, e.g. `pte` in `PTE1`.
    pub fn short_id(&self) -> &'static str {
        match self {
            BlockKind::Coordinate => "c",
            BlockKind::Summationsstelle => "s",
            BlockKind::Verzweigung => "v",
            BlockKind::PGlied => "p",
            BlockKind::IGlied => "i",
            BlockKind::DGlied => "d",
            BlockKind::PTEinsGlied => "pte",
            BlockKind::PTZweiGlied => "ptz",
            BlockKind::TZGlied => "tz",
            BlockKind::UeFunk => "u",
            BlockKind::MGlied => "m",
            BlockKind::KLGlied => "kl",
            BlockKind::Saettigung => "sat",
        }
    }

    /// Looks up a kind by its short identifier, case-insensitively.
    pub fn from_short_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.short_id().eq_ignore_ascii_case(id))
    }

    /// Number of free parameter slots the kind's TikZ macro expects.
    pub fn parameter_count(&self) -> usize {
        match self {
            BlockKind::Coordinate | BlockKind::Summationsstelle | BlockKind::Verzweigung => 0,
            BlockKind::PGlied
            | BlockKind::IGlied
            | BlockKind::DGlied
            | BlockKind::UeFunk
            | BlockKind::MGlied => 1,
            BlockKind::PTEinsGlied
            | BlockKind::PTZweiGlied
            | BlockKind::TZGlied
            | BlockKind::Saettigung => 2,
            BlockKind::KLGlied => 3,
        }
    }

    /// Default drawing size including physical units, or `None` for the
    /// coordinate kind, which has no drawn shape.
    pub fn default_size(&self) -> Option<&'static str> {
        match self {
            BlockKind::Coordinate => None,
            BlockKind::Summationsstelle => Some("0.4 cm"),
            BlockKind::Verzweigung => Some("2 pt"),
            _ => Some("1 cm"),
        }
    }

    /// Whether this kind is the signal branch joint.
    pub fn is_joint(&self) -> bool {
        matches!(self, BlockKind::Verzweigung)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown block kind `{s}`"))
    }
}

/// A drawable block placed in the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    kind: BlockKind,
    name: String,
    position: Point,
    size: String,
    parameters: Vec<String>,
}

impl Block {
    /// Creates a new block.
    ///
    /// `size` must include physical units (e.g. `1 cm`); `parameters` is
    /// expected to have exactly [`BlockKind::parameter_count`] entries.
    pub fn new(
        kind: BlockKind,
        name: impl Into<String>,
        position: Point,
        size: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            position,
            size: size.into(),
            parameters,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Drawing size including units.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Free parameter strings, one per macro slot; empty strings are
    /// emitted as empty groups.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

/// A bare named coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    name: String,
    position: Point,
}

impl Coordinate {
    /// Creates a new named coordinate.
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A placed diagram node: a drawable block or a bare coordinate.
///
/// The two cases share name and position; only blocks carry a size and
/// parameters. Serialization dispatches on the case; coordinates get no
/// block-definition line.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Block(Block),
    Coordinate(Coordinate),
}

impl Node {
    /// The node's unique name, the identity key for all lookups.
    pub fn name(&self) -> &str {
        match self {
            Node::Block(block) => block.name(),
            Node::Coordinate(coordinate) => coordinate.name(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Node::Block(block) => block.kind(),
            Node::Coordinate(_) => BlockKind::Coordinate,
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Node::Block(block) => block.position(),
            Node::Coordinate(coordinate) => coordinate.position(),
        }
    }

    /// Returns the block case, or `None` for a coordinate.
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Coordinate(_) => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        match self {
            Node::Block(block) => block.name = name,
            Node::Coordinate(coordinate) => coordinate.name = name,
        }
    }
}
