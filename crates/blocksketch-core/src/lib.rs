//! Blocksketch Core Types and Definitions
//!
//! This crate provides the foundational types for Blocksketch block
//! diagrams. It includes:
//!
//! - **Block kinds**: The fixed set of diagram element kinds with their
//!   static size and parameter tables ([`block::BlockKind`])
//! - **Nodes**: Placed diagram elements, either a drawable block or a bare
//!   coordinate ([`block::Node`])
//! - **Diagram**: The entity store with nodes, directed signal edges, and
//!   the branch-joint insertion pass ([`diagram::Diagram`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod block;
pub mod diagram;
pub mod error;
pub mod geometry;
