//! Step snapshots and the step log
//!
//! Every algorithm in this crate runs to completion up front and records a
//! [`Step`] at each pause-worthy point (comparison, swap, visit, queue or
//! stack update). The resulting [`Trace`] is immutable; replaying its steps
//! in order reconstructs the algorithm's execution exactly.
//!
//! # Output sink
//!
//! Algorithms never collect steps through captured state. They receive a
//! `&mut` [`StepLog`] and push into it, threading the same log through every
//! recursive call. The log enforces a memory budget, mirroring a snapshot
//! history with a byte limit.
//!
//! # Algorithms
//!
//! - [`sorting`]: bubble, quick (Lomuto) and merge sort
//! - [`graph`]: breadth-first and depth-first search
//! - [`tree`]: in-order, pre-order, post-order and level-order traversal

pub mod graph;
pub mod sorting;
pub mod tree;

use crate::algorithm::Algorithm;
use crate::errors::TraceError;
use crate::structures::NodeId;
use rustc_hash::FxHashSet;
use std::fmt;

/// Default step log budget (256 MiB)
pub const DEFAULT_STEP_LIMIT: usize = 256 * 1024 * 1024;

/// Snapshot of a sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStep {
    pub array: Vec<i32>,
    pub comparing: Option<(usize, usize)>,
    pub swapping: Option<(usize, usize)>,
    /// Indices marked final; empty when nothing is marked
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
}

impl SortStep {
    /// A step showing only the array contents
    pub fn plain(array: &[i32]) -> Self {
        SortStep {
            array: array.to_vec(),
            comparing: None,
            swapping: None,
            sorted: Vec::new(),
            pivot: None,
        }
    }

    /// Every index marked sorted
    pub fn finished(array: &[i32]) -> Self {
        SortStep::plain(array).with_sorted((0..array.len()).collect())
    }

    pub fn with_comparing(mut self, a: usize, b: usize) -> Self {
        self.comparing = Some((a, b));
        self
    }

    pub fn with_swapping(mut self, a: usize, b: usize) -> Self {
        self.swapping = Some((a, b));
        self
    }

    pub fn with_sorted(mut self, sorted: Vec<usize>) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// How a renderer should emphasise the bar at `index`
    pub fn highlight(&self, index: usize) -> BarHighlight {
        let in_pair = |pair: Option<(usize, usize)>| pair.is_some_and(|(a, b)| a == index || b == index);
        if self.sorted.contains(&index) {
            BarHighlight::Sorted
        } else if in_pair(self.swapping) {
            BarHighlight::Swapping
        } else if in_pair(self.comparing) {
            BarHighlight::Comparing
        } else if self.pivot == Some(index) {
            BarHighlight::Pivot
        } else {
            BarHighlight::Idle
        }
    }

    fn estimated_size(&self) -> usize {
        64 + self.array.len() * std::mem::size_of::<i32>()
            + self.sorted.len() * std::mem::size_of::<usize>()
    }
}

/// Snapshot of a graph or tree traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStep {
    /// Visited node ids, in the order they were finalised
    pub visited: Vec<NodeId>,
    /// Node being processed at this instant
    pub current: Option<NodeId>,
    /// Queue (BFS) or stack (DFS) contents; the algorithm decides which
    pub work_list: Option<Vec<NodeId>>,
    /// Values emitted so far
    pub order: Vec<i32>,
}

impl TraversalStep {
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    /// How a renderer should emphasise node `id`
    pub fn highlight(&self, id: NodeId) -> NodeHighlight {
        if self.current == Some(id) {
            NodeHighlight::Current
        } else if self.is_visited(id) {
            NodeHighlight::Visited
        } else if self.work_list.as_ref().is_some_and(|w| w.contains(&id)) {
            NodeHighlight::Pending
        } else {
            NodeHighlight::Unvisited
        }
    }

    fn estimated_size(&self) -> usize {
        let ids = self.visited.len() + self.work_list.as_ref().map_or(0, Vec::len);
        64 + ids * std::mem::size_of::<NodeId>() + self.order.len() * std::mem::size_of::<i32>()
    }
}

/// Bar emphasis, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHighlight {
    Sorted,
    Swapping,
    Comparing,
    Pivot,
    Idle,
}

/// Node emphasis, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeHighlight {
    Current,
    Visited,
    Pending,
    Unvisited,
}

/// One freeze-frame of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Sort(SortStep),
    Traversal(TraversalStep),
}

impl Step {
    pub fn as_sort(&self) -> Option<&SortStep> {
        match self {
            Step::Sort(step) => Some(step),
            Step::Traversal(_) => None,
        }
    }

    pub fn as_traversal(&self) -> Option<&TraversalStep> {
        match self {
            Step::Traversal(step) => Some(step),
            Step::Sort(_) => None,
        }
    }

    fn estimated_size(&self) -> usize {
        match self {
            Step::Sort(step) => step.estimated_size(),
            Step::Traversal(step) => step.estimated_size(),
        }
    }
}

fn write_pair(f: &mut fmt::Formatter<'_>, label: &str, pair: Option<(usize, usize)>) -> fmt::Result {
    match pair {
        Some((a, b)) => write!(f, " {}=({},{})", label, a, b),
        None => Ok(()),
    }
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &[NodeId]) -> fmt::Result {
    let names: Vec<String> = ids.iter().map(|id| id.0.to_string()).collect();
    write!(f, "[{}]", names.join(","))
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Sort(step) => {
                write!(f, "{:?}", step.array)?;
                write_pair(f, "cmp", step.comparing)?;
                write_pair(f, "swap", step.swapping)?;
                if let Some(pivot) = step.pivot {
                    write!(f, " pivot={}", pivot)?;
                }
                if !step.sorted.is_empty() {
                    write!(f, " sorted={:?}", step.sorted)?;
                }
                Ok(())
            }
            Step::Traversal(step) => {
                write!(f, "visited=")?;
                write_ids(f, &step.visited)?;
                if let Some(current) = step.current {
                    write!(f, " current={}", current.0)?;
                }
                if let Some(work) = &step.work_list {
                    write!(f, " work=")?;
                    write_ids(f, work)?;
                }
                write!(f, " order={:?}", step.order)
            }
        }
    }
}

/// Append-only step sink with a memory budget
#[derive(Debug)]
pub struct StepLog {
    steps: Vec<Step>,
    max_memory: usize,
    current_memory: usize,
}

impl StepLog {
    pub fn new(max_memory: usize) -> Self {
        StepLog {
            steps: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    pub fn unbounded() -> Self {
        StepLog::new(usize::MAX)
    }

    /// Append a step, failing if the budget would be exceeded
    pub fn push(&mut self, step: Step) -> Result<(), TraceError> {
        let size = step.estimated_size();
        if self.current_memory.saturating_add(size) > self.max_memory {
            return Err(TraceError::StepLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }
        self.current_memory += size;
        self.steps.push(step);
        Ok(())
    }

    pub fn sort(&mut self, step: SortStep) -> Result<(), TraceError> {
        self.push(Step::Sort(step))
    }

    pub fn traversal(&mut self, step: TraversalStep) -> Result<(), TraceError> {
        self.push(Step::Traversal(step))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Seal the log into an immutable trace
    pub fn finish(self, algorithm: Algorithm) -> Trace {
        Trace {
            algorithm,
            steps: self.steps,
        }
    }
}

/// Complete, immutable step sequence of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl Trace {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Running visited set and output order shared by the traversals
#[derive(Debug, Default)]
pub(crate) struct Visits {
    order_ids: Vec<NodeId>,
    seen: FxHashSet<NodeId>,
    values: Vec<i32>,
}

impl Visits {
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.seen.contains(&id)
    }

    pub(crate) fn mark(&mut self, id: NodeId, value: i32) {
        if self.seen.insert(id) {
            self.order_ids.push(id);
            self.values.push(value);
        }
    }

    pub(crate) fn snapshot(&self, current: Option<NodeId>, work_list: Option<Vec<NodeId>>) -> TraversalStep {
        TraversalStep {
            visited: self.order_ids.clone(),
            current,
            work_list,
            order: self.values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_highlight_precedence() {
        let step = SortStep::plain(&[3, 1, 2])
            .with_comparing(0, 1)
            .with_swapping(1, 2)
            .with_sorted(vec![2])
            .with_pivot(0);
        assert_eq!(step.highlight(2), BarHighlight::Sorted);
        assert_eq!(step.highlight(1), BarHighlight::Swapping);
        assert_eq!(step.highlight(0), BarHighlight::Comparing);

        let pivot_only = SortStep::plain(&[3, 1, 2]).with_pivot(2);
        assert_eq!(pivot_only.highlight(2), BarHighlight::Pivot);
        assert_eq!(pivot_only.highlight(0), BarHighlight::Idle);
    }

    #[test]
    fn test_node_highlight_precedence() {
        let step = TraversalStep {
            visited: vec![NodeId(0)],
            current: Some(NodeId(1)),
            work_list: Some(vec![NodeId(1), NodeId(2)]),
            order: vec![1],
        };
        assert_eq!(step.highlight(NodeId(1)), NodeHighlight::Current);
        assert_eq!(step.highlight(NodeId(0)), NodeHighlight::Visited);
        assert_eq!(step.highlight(NodeId(2)), NodeHighlight::Pending);
        assert_eq!(step.highlight(NodeId(3)), NodeHighlight::Unvisited);
    }

    #[test]
    fn test_step_log_limit() {
        let mut log = StepLog::new(100);
        log.sort(SortStep::plain(&[1, 2, 3])).unwrap();
        let err = log.sort(SortStep::plain(&[1, 2, 3])).unwrap_err();
        assert!(matches!(err, TraceError::StepLimitExceeded { limit: 100, .. }));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_finish_tags_algorithm() {
        let mut log = StepLog::unbounded();
        log.sort(SortStep::plain(&[1])).unwrap();
        let trace = log.finish(Algorithm::Merge);
        assert_eq!(trace.algorithm(), Algorithm::Merge);
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_step_display() {
        let sort = Step::Sort(SortStep::plain(&[2, 1]).with_comparing(0, 1));
        assert_eq!(sort.to_string(), "[2, 1] cmp=(0,1)");

        let traversal = Step::Traversal(TraversalStep {
            visited: vec![NodeId(0)],
            current: None,
            work_list: Some(vec![NodeId(1), NodeId(2)]),
            order: vec![1],
        });
        assert_eq!(traversal.to_string(), "visited=[0] work=[1,2] order=[1]");
    }
}
