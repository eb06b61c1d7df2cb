//! Input structures and their random generators
//!
//! This module provides the three structure families the algorithms run on:
//! - [`array`]: plain integer arrays for the sorting algorithms
//! - [`graph`]: undirected graphs with a circular default layout
//! - [`tree`]: arena-backed binary search trees with a precomputed layout
//! - [`generator`]: a seeded [`Generator`] producing fresh structures
//!
//! Every generator call returns a new, independently owned value. A trace
//! computed from an older structure therefore stays valid after a reshuffle.

pub mod array;
pub mod generator;
pub mod graph;
pub mod tree;

pub use generator::Generator;
pub use graph::{Edge, Graph, GraphLayout, GraphNode};
pub use tree::{Tree, TreeLayout, TreeNode};

use crate::algorithm::Family;
use std::fmt;

/// Stable identifier of a graph or tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Layout position in drawing units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One input structure, tagged by family
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    Array(Vec<i32>),
    Graph(Graph),
    Tree(Tree),
}

impl Structure {
    /// The algorithm family this structure feeds
    pub fn family(&self) -> Family {
        match self {
            Structure::Array(_) => Family::Sorting,
            Structure::Graph(_) => Family::Graph,
            Structure::Tree(_) => Family::Tree,
        }
    }

    /// Node ids a traversal may start from, in id order
    pub fn node_ids(&self) -> Vec<NodeId> {
        match self {
            Structure::Array(_) => Vec::new(),
            Structure::Graph(graph) => graph.nodes().iter().map(|n| n.id).collect(),
            Structure::Tree(tree) => tree.nodes().iter().map(|n| n.id).collect(),
        }
    }

    /// Display value of a node, if the structure has one with this id
    pub fn node_value(&self, id: NodeId) -> Option<i32> {
        match self {
            Structure::Array(_) => None,
            Structure::Graph(graph) => graph.node(id).map(|n| n.value),
            Structure::Tree(tree) => tree.node(id).map(|n| n.value),
        }
    }
}
