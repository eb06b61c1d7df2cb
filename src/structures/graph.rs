//! Undirected graphs and the connected random graph generator
//!
//! Nodes are stored in id order (`NodeId(i)` lives at index `i`). Edges are
//! unordered pairs kept in insertion order, which is also the order in which
//! [`Graph::neighbors`] reports adjacent nodes.
//!
//! # Preconditions
//!
//! Edges must only reference existing nodes. [`generate_graph`] guarantees
//! this; [`Graph::new`] trusts its caller and traversals do not re-check.

use super::{NodeId, Point};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::f64::consts::PI;

/// A graph vertex with its label and layout position
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub value: i32,
    pub position: Point,
}

/// Undirected edge; `from`/`to` only record insertion orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Edge { from, to }
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.from == id {
            Some(self.to)
        } else if self.to == id {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Placement of generated nodes on a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    pub center: Point,
    pub radius: f64,
}

impl Default for GraphLayout {
    fn default() -> Self {
        GraphLayout {
            center: Point::new(300.0, 200.0),
            radius: 120.0,
        }
    }
}

/// Simple undirected graph
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    /// Build a graph with nodes `0..values.len()` laid out on `layout`
    pub fn with_values(values: &[i32], edges: &[(usize, usize)], layout: &GraphLayout) -> Self {
        let count = values.len();
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, &value)| GraphNode {
                id: NodeId(i),
                value,
                position: circle_position(i, count, layout),
            })
            .collect();
        let edges = edges
            .iter()
            .map(|&(a, b)| Edge::new(NodeId(a), NodeId(b)))
            .collect();
        Graph { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// All nodes sharing an edge with `id`, in edge insertion order
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges.iter().filter_map(|e| e.other(id)).collect()
    }

    /// Every node reachable from `start`, including `start` itself
    pub fn reachable_from(&self, start: NodeId) -> FxHashSet<NodeId> {
        let mut seen = FxHashSet::default();
        if !self.contains(start) {
            return seen;
        }
        let mut pending = vec![start];
        seen.insert(start);
        while let Some(id) = pending.pop() {
            for next in self.neighbors(id) {
                if seen.insert(next) {
                    pending.push(next);
                }
            }
        }
        seen
    }

    /// True when every node is reachable from the first one
    pub fn is_connected(&self) -> bool {
        match self.nodes.first() {
            None => true,
            Some(first) => self.reachable_from(first.id).len() == self.nodes.len(),
        }
    }

    /// True when there are no self loops and no duplicate undirected edges
    pub fn is_simple(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.edges.iter().all(|e| {
            let key = if e.from <= e.to {
                (e.from, e.to)
            } else {
                (e.to, e.from)
            };
            e.from != e.to && seen.insert(key)
        })
    }
}

fn circle_position(index: usize, count: usize, layout: &GraphLayout) -> Point {
    let angle = (index as f64 * 2.0 * PI) / count.max(1) as f64;
    Point::new(
        layout.center.x + layout.radius * angle.cos(),
        layout.center.y + layout.radius * angle.sin(),
    )
}

/// Generate a connected simple graph with `node_count` nodes.
///
/// Node `i` is labelled `i + 1`. A path `0-1-..-(n-1)` guarantees
/// connectivity; extra edges are drawn without replacement from the
/// remaining pairs until a target count in `[n, n + 5]` is reached.
pub fn generate_graph<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    layout: &GraphLayout,
) -> Graph {
    let values: Vec<i32> = (1..=node_count)
        .map(|v| i32::try_from(v).unwrap_or(i32::MAX))
        .collect();

    let mut edges: Vec<(usize, usize)> = (1..node_count).map(|i| (i - 1, i)).collect();

    let mut remaining: Vec<(usize, usize)> = Vec::new();
    for i in 0..node_count {
        for j in (i + 2)..node_count {
            remaining.push((i, j));
        }
    }

    let target = rng.random_range(node_count..=node_count + 5);
    while edges.len() < target && !remaining.is_empty() {
        let pick = rng.random_range(0..remaining.len());
        edges.push(remaining.remove(pick));
    }

    Graph::with_values(&values, &edges, layout)
}
