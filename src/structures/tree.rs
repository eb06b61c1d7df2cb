//! Arena-backed binary search tree
//!
//! Nodes live in a flat `Vec` and refer to their children by [`NodeId`],
//! which is also the node's index in the arena and its insertion order.
//! The tree is built once per generation and never mutated by a traversal.
//!
//! # Insertion
//!
//! Standard unbalanced BST insertion: `value < node.value` goes left,
//! everything else (duplicates included) goes right.
//!
//! # Layout
//!
//! [`Tree::layout`] places the root at `root`, moves each level down by
//! `level_height`, and offsets children horizontally by `spread / 2^depth`.

use super::{NodeId, Point};
use rand::Rng;

/// A single tree node; children are arena ids
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i32,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub position: Point,
}

/// Layout parameters for [`Tree::layout`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeLayout {
    pub root: Point,
    pub level_height: f64,
    pub spread: f64,
}

impl Default for TreeLayout {
    fn default() -> Self {
        TreeLayout {
            root: Point::new(400.0, 50.0),
            level_height: 80.0,
            spread: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    /// Insert `values` in order into an empty tree
    pub fn from_values(values: &[i32]) -> Self {
        let mut tree = Tree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Insert a value and return the id of the new node
    pub fn insert(&mut self, value: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            value,
            left: None,
            right: None,
            position: Point::default(),
        });

        let Some(mut cursor) = self.root else {
            self.root = Some(id);
            return id;
        };

        loop {
            let parent = &mut self.nodes[cursor.0];
            let slot = if value < parent.value {
                &mut parent.left
            } else {
                &mut parent.right
            };
            match *slot {
                Some(child) => cursor = child,
                None => {
                    *slot = Some(id);
                    return id;
                }
            }
        }
    }

    /// Assign a drawing position to every node
    pub fn layout(&mut self, layout: &TreeLayout) {
        let Some(root) = self.root else {
            return;
        };
        let mut pending = vec![(root, layout.root, 0i32)];
        while let Some((id, position, level)) = pending.pop() {
            let offset = layout.spread / 2f64.powi(level);
            let child_y = position.y + layout.level_height;
            let node = &mut self.nodes[id.0];
            node.position = position;
            if let Some(left) = node.left {
                pending.push((left, Point::new(position.x - offset, child_y), level + 1));
            }
            if let Some(right) = node.right {
                pending.push((right, Point::new(position.x + offset, child_y), level + 1));
            }
        }
    }

    /// Check the BST ordering at every node: left subtree `<`, right subtree `>=`
    pub fn is_search_tree(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };
        // (node, exclusive upper bound, inclusive lower bound)
        let mut pending: Vec<(NodeId, Option<i32>, Option<i32>)> = vec![(root, None, None)];
        while let Some((id, below, at_least)) = pending.pop() {
            let Some(node) = self.node(id) else {
                return false;
            };
            if below.is_some_and(|b| node.value >= b) || at_least.is_some_and(|a| node.value < a) {
                return false;
            }
            if let Some(left) = node.left {
                pending.push((left, Some(node.value), at_least));
            }
            if let Some(right) = node.right {
                pending.push((right, below, Some(node.value)));
            }
        }
        true
    }
}

/// Insert `value_count` random values in `[min, max]` and lay the tree out
pub fn generate_tree<R: Rng + ?Sized>(
    rng: &mut R,
    value_count: usize,
    min: i32,
    max: i32,
    layout: &TreeLayout,
) -> Tree {
    let values = super::array::generate_array(rng, value_count, min, max);
    let mut tree = Tree::from_values(&values);
    tree.layout(layout);
    tree
}
