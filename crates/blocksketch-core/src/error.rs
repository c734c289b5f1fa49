//! Error types for diagram mutations.

use thiserror::Error;

/// Errors raised by the [`Diagram`](crate::diagram::Diagram) mutation API.
///
/// Every failing operation leaves the diagram unchanged; there is no partial
/// mutation to roll back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// A node with this name already exists.
    #[error("block '{0}' already exists")]
    DuplicateName(String),

    /// No node with this name exists.
    #[error("block '{0}' not found")]
    UnknownReference(String),

    /// The ordered pair of nodes is already connected.
    #[error("blocks '{from}' and '{to}' are already connected")]
    DuplicateEdge { from: String, to: String },

    /// The ordered pair of nodes has no connection to delete.
    #[error("no connection between blocks '{from}' and '{to}'")]
    MissingEdge { from: String, to: String },

    /// The node still has incident connections and cannot be deleted.
    #[error("block '{0}' still has connections attached")]
    EdgesAttached(String),
}
