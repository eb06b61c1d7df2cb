//! Breadth-first and depth-first graph search
//!
//! Both searches share one loop shape: pop from the work list, skip ids
//! already visited (silently), then record three steps per visit:
//!
//! 1. the popped node as `current`, before it is marked visited
//! 2. the node marked visited and appended to the order
//! 3. the work list after the unvisited neighbours were pushed
//!
//! Only the start node's component is explored.

use super::{StepLog, Visits};
use crate::errors::TraceError;
use crate::structures::{Graph, NodeId};
use std::collections::VecDeque;

/// Breadth-first search with a FIFO queue; neighbours already queued are not re-queued
pub fn bfs(graph: &Graph, start: NodeId, log: &mut StepLog) -> Result<(), TraceError> {
    if !graph.contains(start) {
        return Err(TraceError::InvalidStartNode { id: start });
    }

    let mut visits = Visits::default();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    log.traversal(visits.snapshot(None, Some(queue_ids(&queue))))?;

    while let Some(id) = queue.pop_front() {
        if visits.contains(id) {
            continue;
        }
        log.traversal(visits.snapshot(Some(id), Some(queue_ids(&queue))))?;

        visit(graph, &mut visits, id);
        log.traversal(visits.snapshot(None, Some(queue_ids(&queue))))?;

        for neighbor in graph.neighbors(id) {
            if !visits.contains(neighbor) && !queue.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
        log.traversal(visits.snapshot(None, Some(queue_ids(&queue))))?;
    }

    Ok(())
}

/// Depth-first search with a LIFO stack.
///
/// Neighbours are pushed in reverse so they pop in edge order. The stack is
/// not deduplicated: a node may be pushed several times and skipped later.
pub fn dfs(graph: &Graph, start: NodeId, log: &mut StepLog) -> Result<(), TraceError> {
    if !graph.contains(start) {
        return Err(TraceError::InvalidStartNode { id: start });
    }

    let mut visits = Visits::default();
    let mut stack: Vec<NodeId> = vec![start];
    log.traversal(visits.snapshot(None, Some(stack.clone())))?;

    while let Some(id) = stack.pop() {
        if visits.contains(id) {
            continue;
        }
        log.traversal(visits.snapshot(Some(id), Some(stack.clone())))?;

        visit(graph, &mut visits, id);
        log.traversal(visits.snapshot(None, Some(stack.clone())))?;

        for neighbor in graph.neighbors(id).into_iter().rev() {
            if !visits.contains(neighbor) {
                stack.push(neighbor);
            }
        }
        log.traversal(visits.snapshot(None, Some(stack.clone())))?;
    }

    Ok(())
}

fn visit(graph: &Graph, visits: &mut Visits, id: NodeId) {
    // Edges only reference existing nodes, so the lookup always succeeds
    if let Some(node) = graph.node(id) {
        visits.mark(id, node.value);
    }
}

fn queue_ids(queue: &VecDeque<NodeId>) -> Vec<NodeId> {
    queue.iter().copied().collect()
}
