//! The diagram graph: nodes, directed signal edges, and joint insertion.
//!
//! [`Diagram`] stores nodes in insertion order with a name-to-index lookup
//! table and keeps edges in a sparse map keyed by stable node indices. All
//! mutations check their preconditions before touching any state, so a
//! failed operation leaves the diagram exactly as it was.

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};

use crate::block::{Block, BlockKind, Coordinate, Node};
use crate::error::DiagramError;
use crate::geometry::Point;

/// Weight of a directed signal connection.
///
/// The weight affects the emitted line style and the fan-out accounting of
/// the joint-insertion pass; the signal is not computed differently
/// otherwise. Absence of a connection is the absence of a map entry, not a
/// third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeWeight {
    Scalar,
    Vector,
}

impl EdgeWeight {
    /// Units of outgoing signal this connection contributes to its source.
    pub fn weight(&self) -> u32 {
        match self {
            EdgeWeight::Scalar => 1,
            EdgeWeight::Vector => 2,
        }
    }
}

/// A resolved view of one directed connection.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    pub from: &'a Node,
    pub to: &'a Node,
    pub weight: EdgeWeight,
}

/// A block diagram: uniquely named nodes plus directed, weighted edges.
///
/// Node storage preserves insertion order; that order is the tie-break for
/// the serializer's stable sorts and the scan order of
/// [`insert_joints`](Diagram::insert_joints), and is otherwise not
/// semantically significant.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    /// Sparse adjacency: (from index, to index) -> weight, at most one edge
    /// per ordered pair. BTreeMap iteration gives row-major edge order.
    edges: BTreeMap<(usize, usize), EdgeWeight>,
    auto_joint_counter: usize,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the diagram.
    pub fn num_blocks(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the diagram has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the node with this name, if any.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&idx| &self.nodes[idx])
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterates over all edges in row-major (source index, target index)
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.edges.iter().map(|(&(from, to), &weight)| Edge {
            from: &self.nodes[from],
            to: &self.nodes[to],
            weight,
        })
    }

    /// Number of edges in the diagram.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn index_of(&self, name: &str) -> Result<usize, DiagramError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DiagramError::UnknownReference(name.to_owned()))
    }

    /// Adds a block or a coordinate.
    ///
    /// `size` and `parameters` default from the kind's static tables when
    /// omitted; both are ignored for the coordinate kind, which has
    /// neither.
    ///
    /// # Errors
    ///
    /// [`DiagramError::DuplicateName`] if a node with this name exists.
    pub fn add_block(
        &mut self,
        kind: BlockKind,
        name: &str,
        position: Point,
        size: Option<&str>,
        parameters: Option<Vec<String>>,
    ) -> Result<(), DiagramError> {
        if self.contains(name) {
            return Err(DiagramError::DuplicateName(name.to_owned()));
        }

        let node = if kind == BlockKind::Coordinate {
            Node::Coordinate(Coordinate::new(name, position))
        } else {
            let size = size
                .or_else(|| kind.default_size())
                .unwrap_or_default()
                .to_owned();
            let parameters = parameters
                .unwrap_or_else(|| vec![String::new(); kind.parameter_count()]);
            Node::Block(Block::new(kind, name, position, size, parameters))
        };

        trace!(kind = kind.name(), name; "adding block");
        self.index.insert(name.to_owned(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Deletes a node.
    ///
    /// # Errors
    ///
    /// [`DiagramError::UnknownReference`] if the node does not exist, and
    /// [`DiagramError::EdgesAttached`] if it still has incident edges;
    /// callers must delete those first so no dangling edge reference can
    /// ever be left behind.
    pub fn delete_block(&mut self, name: &str) -> Result<(), DiagramError> {
        let idx = self.index_of(name)?;

        if self.edges.keys().any(|&(from, to)| from == idx || to == idx) {
            return Err(DiagramError::EdgesAttached(name.to_owned()));
        }

        trace!(name; "deleting block");
        self.nodes.remove(idx);
        self.index.remove(name);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        // Close the index gap left by the removed node.
        let shift = |i: usize| if i > idx { i - 1 } else { i };
        self.edges = std::mem::take(&mut self.edges)
            .into_iter()
            .map(|((from, to), weight)| ((shift(from), shift(to)), weight))
            .collect();
        Ok(())
    }

    /// Renames a node, keeping its index and all its edges.
    ///
    /// # Errors
    ///
    /// [`DiagramError::UnknownReference`] if `old_name` does not exist,
    /// [`DiagramError::DuplicateName`] if `new_name` is already taken.
    pub fn rename_block(&mut self, old_name: &str, new_name: &str) -> Result<(), DiagramError> {
        if self.contains(new_name) {
            return Err(DiagramError::DuplicateName(new_name.to_owned()));
        }
        let idx = self.index_of(old_name)?;

        trace!(old_name, new_name; "renaming block");
        self.index.remove(old_name);
        self.index.insert(new_name.to_owned(), idx);
        self.nodes[idx].set_name(new_name.to_owned());
        Ok(())
    }

    /// Adds a directed connection between two existing nodes.
    ///
    /// # Errors
    ///
    /// [`DiagramError::UnknownReference`] if either endpoint is absent,
    /// [`DiagramError::DuplicateEdge`] if the ordered pair is already
    /// connected (with any weight).
    pub fn add_connection(
        &mut self,
        from: &str,
        to: &str,
        weight: EdgeWeight,
    ) -> Result<(), DiagramError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        if self.edges.contains_key(&(from_idx, to_idx)) {
            return Err(DiagramError::DuplicateEdge {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }

        trace!(from, to, weight:?; "adding connection");
        self.edges.insert((from_idx, to_idx), weight);
        Ok(())
    }

    /// Deletes the connection between two nodes.
    ///
    /// # Errors
    ///
    /// [`DiagramError::UnknownReference`] if either endpoint is absent,
    /// [`DiagramError::MissingEdge`] if the ordered pair is not connected.
    pub fn delete_connection(&mut self, from: &str, to: &str) -> Result<(), DiagramError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;

        if self.edges.remove(&(from_idx, to_idx)).is_none() {
            return Err(DiagramError::MissingEdge {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }
        Ok(())
    }

    /// Sum of outgoing edge weights of the node at `idx`.
    fn outgoing_weight(&self, idx: usize) -> u32 {
        self.edges
            .range((idx, 0)..=(idx, usize::MAX))
            .map(|(_, weight)| weight.weight())
            .sum()
    }

    /// Inserts branch joints until every non-joint node has at most one
    /// unit of outgoing signal.
    ///
    /// Each pass takes the first node in storage order whose outgoing
    /// weight sum exceeds one, creates a joint named `ajnt<k>` shifted 20%
    /// to the right of it, moves the node's entire outgoing edge row onto
    /// the joint, and connects the node to the joint with a single scalar
    /// edge. Joints themselves never qualify, so the pass reaches a
    /// fixpoint; running it again on a processed diagram is a no-op. The
    /// joint counter persists across calls.
    ///
    /// # Errors
    ///
    /// [`DiagramError::DuplicateName`] if a node named `ajnt<k>` already
    /// exists.
    pub fn insert_joints(&mut self) -> Result<(), DiagramError> {
        loop {
            let qualifying = (0..self.nodes.len()).find(|&idx| {
                !self.nodes[idx].kind().is_joint() && self.outgoing_weight(idx) > 1
            });
            let Some(source_idx) = qualifying else {
                return Ok(());
            };

            self.auto_joint_counter += 1;
            let joint_name = format!("ajnt{}", self.auto_joint_counter);
            let source_position = self.nodes[source_idx].position();
            let joint_position = Point::new(1.2 * source_position.x, source_position.y);

            debug!(
                joint = joint_name,
                source = self.nodes[source_idx].name();
                "inserting branch joint"
            );
            self.add_block(BlockKind::Verzweigung, &joint_name, joint_position, None, None)?;
            let joint_idx = self.nodes.len() - 1;

            // Re-root the source's outgoing row at the joint, same targets
            // and weights, then feed the joint with one scalar edge.
            let row: Vec<(usize, EdgeWeight)> = self
                .edges
                .range((source_idx, 0)..=(source_idx, usize::MAX))
                .map(|(&(_, to), &weight)| (to, weight))
                .collect();
            for (to, weight) in row {
                self.edges.remove(&(source_idx, to));
                self.edges.insert((joint_idx, to), weight);
            }
            self.edges.insert((source_idx, joint_idx), EdgeWeight::Scalar);
        }
    }
}
