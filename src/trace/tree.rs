//! Binary tree traversals
//!
//! Every visit is recorded as a pair of steps: first the node as `current`
//! with visited/order unchanged, then `current` cleared with the node added
//! to visited and its value appended to the order. Trees have no cycles, so
//! no "already visited" check is needed.
//!
//! Traversals start at the root, or at an explicit node to walk only that
//! subtree. An empty tree yields an empty step sequence.

use super::{StepLog, Visits};
use crate::errors::TraceError;
use crate::structures::{NodeId, Tree};
use std::collections::VecDeque;

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthOrder {
    InOrder,
    PreOrder,
    PostOrder,
}

/// Resolve the traversal start; `Ok(None)` means the tree is empty
fn resolve_start(tree: &Tree, start: Option<NodeId>) -> Result<Option<NodeId>, TraceError> {
    match start {
        Some(id) if tree.contains(id) => Ok(Some(id)),
        Some(id) => Err(TraceError::InvalidStartNode { id }),
        None => Ok(tree.root()),
    }
}

/// Recursive traversal in the given order
pub fn depth_first(
    tree: &Tree,
    order: DepthOrder,
    start: Option<NodeId>,
    log: &mut StepLog,
) -> Result<(), TraceError> {
    let Some(root) = resolve_start(tree, start)? else {
        return Ok(());
    };
    let mut visits = Visits::default();
    walk(tree, root, order, &mut visits, log)
}

fn walk(
    tree: &Tree,
    id: NodeId,
    order: DepthOrder,
    visits: &mut Visits,
    log: &mut StepLog,
) -> Result<(), TraceError> {
    let Some(node) = tree.node(id) else {
        return Ok(());
    };

    if order == DepthOrder::PreOrder {
        visit_pair(id, node.value, visits, log)?;
    }
    if let Some(left) = node.left {
        walk(tree, left, order, visits, log)?;
    }
    if order == DepthOrder::InOrder {
        visit_pair(id, node.value, visits, log)?;
    }
    if let Some(right) = node.right {
        walk(tree, right, order, visits, log)?;
    }
    if order == DepthOrder::PostOrder {
        visit_pair(id, node.value, visits, log)?;
    }
    Ok(())
}

/// Level-order traversal with a FIFO queue, left child before right
pub fn level_order(tree: &Tree, start: Option<NodeId>, log: &mut StepLog) -> Result<(), TraceError> {
    let Some(root) = resolve_start(tree, start)? else {
        return Ok(());
    };
    let mut visits = Visits::default();
    let mut queue = VecDeque::from([root]);

    while let Some(id) = queue.pop_front() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        visit_pair(id, node.value, &mut visits, log)?;
        queue.extend(node.left);
        queue.extend(node.right);
    }
    Ok(())
}

fn visit_pair(id: NodeId, value: i32, visits: &mut Visits, log: &mut StepLog) -> Result<(), TraceError> {
    log.traversal(visits.snapshot(Some(id), None))?;
    visits.mark(id, value);
    log.traversal(visits.snapshot(None, None))
}
